use leptos::prelude::*;

use crate::core::SectionId;

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    // Brand
                    <div class="footer-brand">
                        <a href=SectionId::Home.href() class="brand">"Northwind."</a>
                        <p class="card-text">
                            "A small product studio designing and building web and mobile software for ambitious teams."
                        </p>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Studio"</h4>
                        <ul class="footer-links">
                            {SectionId::ALL
                                .iter()
                                .filter(|id| !matches!(id, SectionId::Home | SectionId::Contact))
                                .map(|id| {
                                    view! {
                                        <li>
                                            <a href=id.href() data-cursor-hover="">{id.label()}</a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Get in touch"</h4>
                        <ul class="footer-links">
                            <li>
                                <a href="mailto:hello@northwind.studio" data-cursor-hover="">"hello@northwind.studio"</a>
                            </li>
                            <li>
                                <a href=SectionId::Contact.href() data-cursor-hover="">"Start a project"</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>"© 2025 Northwind Studio. All rights reserved."</span>
                    <a href=SectionId::Home.href() class="footer-top" data-cursor-hover="">"Back to top"</a>
                </div>
            </div>
        </footer>
    }
}
