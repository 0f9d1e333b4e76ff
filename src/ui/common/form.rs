use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Text input with floating label
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// `id` and `name` of the input
    name: &'static str,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=name class="form-label">
                {label}
                {required.then(|| view! { <span class="form-required">"*"</span> })}
            </label>
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                class="form-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Multi-line text field
#[component]
pub fn TextAreaField(
    /// Field label text
    label: &'static str,
    /// `id` and `name` of the textarea
    name: &'static str,
    /// Whether field is required (shows asterisk)
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 5)]
    rows: u32,
    /// Whether field is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=name class="form-label">
                {label}
                {required.then(|| view! { <span class="form-required">"*"</span> })}
            </label>
            <textarea
                id=name
                name=name
                class="form-input resize-none"
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
        </div>
    }
}

/// Hint line under a field group
#[component]
pub fn FormHint(text: &'static str) -> impl IntoView {
    view! {
        <p class="form-hint">
            <Icon name=icons::INFO class="icon-text" />
            <span>{text}</span>
        </p>
    }
}
