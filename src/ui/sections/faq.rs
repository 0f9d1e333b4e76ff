use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{FAQ, FaqEntry, toggle_accordion};
use crate::ui::icon::{Icon, icons};

/// Frequently asked questions as a single-open accordion
#[component]
pub fn FaqSection() -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <section id=SectionId::Faq.as_str() class="section faq">
            <div class="container container-narrow">
                <div class="section-header reveal">
                    <p class="eyebrow">"FAQ"</p>
                    <h2 class="section-title">"Questions we hear a lot"</h2>
                </div>

                <div class="faq-list">
                    {FAQ
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <FaqItem entry=*entry index=index open=open /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(entry: FaqEntry, index: usize, open: RwSignal<Option<usize>>) -> impl IntoView {
    let is_open = move || open.get() == Some(index);
    let panel_id = format!("faq-panel-{}", index);

    view! {
        <div class="faq-item reveal" class:faq-item-open=is_open>
            <button
                class="faq-question"
                on:click=move |_| open.update(|o| *o = toggle_accordion(*o, index))
                aria-expanded=move || is_open().to_string()
                aria-controls=panel_id.clone()
            >
                <span>{entry.question}</span>
                <span class="faq-chevron" class:rotate-180=is_open>
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                </span>
            </button>
            <div id=panel_id class="faq-answer" role="region">
                <p>{entry.answer}</p>
            </div>
        </div>
    }
}
