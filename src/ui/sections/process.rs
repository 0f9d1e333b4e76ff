use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::PROCESS_STEPS;

/// How an engagement runs, step by step
#[component]
pub fn ProcessSection() -> impl IntoView {
    view! {
        <section id=SectionId::Process.as_str() class="section process">
            <div class="container">
                <div class="section-header reveal">
                    <p class="eyebrow">"How we work"</p>
                    <h2 class="section-title">"From first call to launch day"</h2>
                    <p class="section-subtitle">
                        "A clear process with no black boxes. You see progress every week."
                    </p>
                </div>

                <ol class="process-list">
                    {PROCESS_STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <li class=format!("process-step reveal reveal-delay-{}", index.min(3))>
                                    <span class="process-number">{format!("{:02}", index + 1)}</span>
                                    <h3 class="card-title">{step.title}</h3>
                                    <p class="card-text">{step.description}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
