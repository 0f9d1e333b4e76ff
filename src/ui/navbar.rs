//! Fixed navigation bar with active-section highlighting

use leptos::prelude::*;

use crate::core::{SectionId, SectionTracker};
use crate::ui::effects::use_scroll_context;
use crate::ui::icon::{Icon, icons};

/// Visibility levels reported by the section observer
#[cfg(not(feature = "ssr"))]
const SECTION_THRESHOLDS: &[f64] = &[0.0, 0.15, 0.3, 0.45, 0.6, 0.75, 0.9, 1.0];

#[component]
pub fn Navbar() -> impl IntoView {
    let scroll = use_scroll_context();
    let tracker = RwSignal::new(SectionTracker::default());
    let active = Memo::new(move |_| tracker.with(|t| t.active()));
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::effects::dom::observe_intersections;

        Effect::new(move |_| {
            let sections: Vec<web_sys::Element> = SectionId::ALL
                .iter()
                .filter_map(|id| {
                    web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id(id.as_str()))
                })
                .collect();

            observe_intersections(&sections, SECTION_THRESHOLDS, "-64px 0px 0px 0px", move |entry, _| {
                let Some(id) = SectionId::from_dom_id(&entry.target().id()) else {
                    return;
                };
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                tracker.update(|t| {
                    t.observe(id, ratio);
                });
            });
        });
    }

    let nav_link = move |id: SectionId, mobile: bool| {
        view! {
            <a
                href=id.href()
                class=if mobile { "nav-link-mobile" } else { "nav-link" }
                class:nav-link-active=move || active.get() == id
                aria-current=move || (active.get() == id).then_some("true")
                on:click=move |_| {
                    tracker.update(|t| t.force(id));
                    set_mobile_menu_open.set(false);
                }
            >
                {id.label()}
            </a>
        }
    };

    view! {
        <header class="navbar" class:navbar-scrolled=move || scroll.is_scrolled()>
            <div class="container navbar-inner">
                <a href="#home" class="navbar-brand" aria-label="Northwind Studio home">
                    "Northwind"<span class="text-accent">"."</span>
                </a>

                <nav class="navbar-links" aria-label="Sections">
                    {SectionId::ALL
                        .into_iter()
                        .filter(|id| *id != SectionId::Home)
                        .map(|id| nav_link(id, false))
                        .collect_view()}
                </nav>

                <a href="#contact" class="btn-primary btn-sm navbar-cta">"Start a project"</a>

                <button
                    class="navbar-toggle"
                    on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            <div class="navbar-mobile" class:navbar-mobile-open=move || mobile_menu_open.get()>
                <nav class="container navbar-mobile-links" aria-label="Sections">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| nav_link(id, true))
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
