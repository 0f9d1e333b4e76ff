use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{ALL_CATEGORIES, PROJECTS, Project, filter_projects, project_categories};

/// Selected work with a category filter
#[component]
pub fn PortfolioSection() -> impl IntoView {
    let (category, set_category) = signal(ALL_CATEGORIES);
    let visible = Memo::new(move |_| filter_projects(PROJECTS, category.get()));

    view! {
        <section id=SectionId::Portfolio.as_str() class="section portfolio">
            <div class="container">
                <div class="section-header reveal">
                    <p class="eyebrow">"Selected work"</p>
                    <h2 class="section-title">"Products we are proud of"</h2>
                </div>

                <div class="filter-bar reveal" role="tablist" aria-label="Filter projects">
                    {project_categories(PROJECTS)
                        .into_iter()
                        .map(|label| {
                            view! {
                                <button
                                    class="filter-chip"
                                    class:filter-chip-active=move || category.get() == label
                                    role="tab"
                                    aria-selected=move || (category.get() == label).to_string()
                                    on:click=move |_| set_category.set(label)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="portfolio-grid">
                    <For
                        each=move || visible.get()
                        key=|project| project.title
                        children=move |project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card" data-cursor-hover="">
            <div
                class="project-media"
                style=format!("background-image: url('{}');", project.image)
                role="img"
                aria-label=project.title
            >
                <span class="project-category">{project.category}</span>
            </div>
            <div class="project-body">
                <h3 class="card-title">{project.title}</h3>
                <p class="card-text">{project.description}</p>
                <div class="tag-list">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{*tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
