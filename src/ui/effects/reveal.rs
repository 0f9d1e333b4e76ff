//! Scroll-triggered reveal animations
//!
//! Elements carrying the `reveal` class start hidden (see `style/main.css`) and
//! get `visible` the first time they enter the viewport. Optional
//! `reveal-delay-*` classes stagger siblings.

use leptos::prelude::*;

/// CSS class that opts an element into the reveal animation
pub const REVEAL_CLASS: &str = "reveal";

/// Observe every `.reveal` element currently in the document.
///
/// Render once, after the sections it should animate.
#[component]
pub fn ScrollReveal() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::effects::dom::{observe_intersections, prefers_reduced_motion, query_all};

        Effect::new(move |_| {
            let targets = query_all(&format!(".{}:not(.visible)", REVEAL_CLASS));

            if prefers_reduced_motion() {
                for el in &targets {
                    let _ = el.class_list().add_1("visible");
                }
                return;
            }

            observe_intersections(&targets, &[0.1], "0px 0px -50px 0px", |entry, observer| {
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            });
        });
    }

    view! { <div class="hidden" aria-hidden="true"></div> }
}
