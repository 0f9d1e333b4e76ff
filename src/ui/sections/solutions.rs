use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{SOLUTIONS, Solution};
use crate::ui::icon::{Icon, icons};

/// Service offering cards
#[component]
pub fn SolutionsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Solutions.as_str() class="section solutions">
            <div class="container">
                <div class="section-header reveal">
                    <p class="eyebrow">"Solutions"</p>
                    <h2 class="section-title">"Everything you need to ship"</h2>
                    <p class="section-subtitle">
                        "Bring us in for a single piece or the whole journey. We plug into your team either way."
                    </p>
                </div>

                <div class="solutions-grid">
                    {SOLUTIONS
                        .iter()
                        .enumerate()
                        .map(|(index, solution)| view! { <SolutionCard solution=*solution index=index /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionCard(solution: Solution, index: usize) -> impl IntoView {
    let icon = match solution.icon {
        "mobile" => icons::MOBILE,
        "cloud" => icons::CLOUD,
        "spark" => icons::SPARK,
        "palette" => icons::PALETTE,
        "shield" => icons::SHIELD,
        _ => icons::CODE,
    };

    view! {
        <article
            class=format!("card solution-card reveal reveal-delay-{}", index % 3)
            data-cursor-hover=""
        >
            <div class="card-icon">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="card-title">{solution.title}</h3>
            <p class="card-text">{solution.summary}</p>
            <ul class="feature-list">
                {solution
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <Icon name=icons::CHECK class="icon-text" />
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
