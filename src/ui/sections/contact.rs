//! Contact section with the lead capture form

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::lead::{ContactForm, send_lead};
use crate::core::{Config, SectionId};
use crate::ui::common::{ErrorMessage, FormField, FormHint, InlineSpinner, SuccessMessage, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_client::BrowserTransport;

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let form = RwSignal::new(ContactForm::default());

    let submitting = Signal::derive(move || form.with(|f| f.is_submitting()));
    let success = Signal::derive(move || form.with(|f| f.status.success_message()));
    let error = Signal::derive(move || form.with(|f| f.status.error_message()));

    let name = Signal::derive(move || form.with(|f| f.fields.name.clone()));
    let email = Signal::derive(move || form.with(|f| f.fields.email.clone()));
    let message = Signal::derive(move || form.with(|f| f.fields.message.clone()));

    let on_name = Callback::new(move |value: String| {
        form.update(|f| {
            f.fields.name = value;
            f.touch();
        })
    });
    let on_email = Callback::new(move |value: String| {
        form.update(|f| {
            f.fields.email = value;
            f.touch();
        })
    });
    let on_message = Callback::new(move |value: String| {
        form.update(|f| {
            f.fields.message = value;
            f.touch();
        })
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Validation failures and double submits come back as None
        let Some(request) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };

        let api_base_url = config.api_base_url().to_string();
        spawn_local(async move {
            let result = send_lead(&BrowserTransport, &api_base_url, &request).await;
            if let Err(err) = &result {
                leptos::logging::warn!("lead submission failed: {}", err);
            }
            form.update(|f| f.finish_submit(result));
        });
    };

    view! {
        <section id=SectionId::Contact.as_str() class="section contact">
            <div class="container contact-grid">
                <div class="contact-intro reveal">
                    <p class="eyebrow">"Contact"</p>
                    <h2 class="section-title">"Tell us about your project"</h2>
                    <p class="section-subtitle">
                        "Share a few details and we will get back to you within one business day with next steps."
                    </p>
                    <a href="mailto:hello@northwind.studio" class="contact-mail" data-cursor-hover="">
                        <Icon name=icons::MAIL class="icon-text" />
                        "hello@northwind.studio"
                    </a>
                </div>

                <form class="card contact-form reveal reveal-delay-1" on:submit=on_submit novalidate=true>
                    <div class="form-row">
                        <FormField
                            label="Name"
                            name="name"
                            required=true
                            autocomplete="name"
                            placeholder="Jane Doe"
                            value=name
                            on_input=on_name
                            disabled=submitting
                        />
                        <FormField
                            label="Email"
                            name="email"
                            input_type="email"
                            required=true
                            autocomplete="email"
                            placeholder="jane@company.com"
                            value=email
                            on_input=on_email
                            disabled=submitting
                        />
                    </div>
                    <TextAreaField
                        label="Project details"
                        name="message"
                        required=true
                        placeholder="What are you building, and when do you need it?"
                        value=message
                        on_input=on_message
                        disabled=submitting
                    />

                    <ErrorMessage error=error />
                    <SuccessMessage message=success />

                    <button
                        type="submit"
                        class="btn-primary w-full"
                        disabled=move || submitting.get()
                        data-cursor-hover=""
                    >
                        {move || {
                            if submitting.get() {
                                view! {
                                    <span class="btn-content">
                                        <InlineSpinner />
                                        "Sending..."
                                    </span>
                                }.into_any()
                            } else {
                                view! {
                                    <span class="btn-content">
                                        "Send message"
                                        <Icon name=icons::ARROW_RIGHT class="icon-text" />
                                    </span>
                                }.into_any()
                            }
                        }}
                    </button>

                    <FormHint text="We only use your details to reply to this enquiry." />
                </form>
            </div>
        </section>
    }
}
