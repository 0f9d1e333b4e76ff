//! Custom cursor and cursor glow overlays
//!
//! Both read the pointer from the scroll context and write transforms straight
//! to their DOM nodes on every animation frame. Nothing here is interactive.

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use crate::core::motion::{Spring, lerp_vec, smoothing};
use crate::ui::effects::scroll::use_scroll_context;

/// Interactive elements that make the cursor ring grow
#[cfg(not(feature = "ssr"))]
const HOVER_TARGETS: &str = "a, button, input, textarea, [data-cursor-hover]";

/// Dot that sticks to the pointer plus a ring that trails it on a spring
#[component]
pub fn CustomCursor() -> impl IntoView {
    let scroll = use_scroll_context();
    let dot_ref = NodeRef::<html::Div>::new();
    let ring_ref = NodeRef::<html::Div>::new();
    let hovering = RwSignal::new(false);
    let enabled = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::effects::dom::{has_coarse_pointer, set_style, start_frame_loop};
        use leptos::ev::mouseover;
        use wasm_bindgen::JsCast;

        Effect::new(move |_| {
            if has_coarse_pointer() {
                return;
            }
            enabled.set(true);

            let handle_over = window_event_listener(mouseover, move |ev| {
                let over_interactive = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.closest(HOVER_TARGETS).ok().flatten())
                    .is_some();
                if hovering.get_untracked() != over_interactive {
                    hovering.set(over_interactive);
                }
            });

            let mut ring = Spring::new(320.0, 32.0);
            ring.snap(scroll.pointer.get_untracked());

            let frames = start_frame_loop(move |_, dt| {
                let pointer = scroll.pointer.get_untracked();
                let ring_position = ring.step(pointer, dt);

                if let Some(dot) = dot_ref.get_untracked() {
                    set_style(&dot, "transform", &pointer.to_translate());
                }
                if let Some(el) = ring_ref.get_untracked() {
                    set_style(&el, "transform", &ring_position.to_translate());
                }
                true
            });

            on_cleanup(move || {
                frames.stop();
                handle_over.remove();
            });
        });
    }

    view! {
        <div class="cursor-layer" aria-hidden="true" class:hidden=move || !enabled.get()>
            <div node_ref=dot_ref class="cursor-dot"></div>
            <div node_ref=ring_ref class="cursor-ring-anchor">
                <div class="cursor-ring" class:cursor-ring-hover=move || hovering.get()></div>
            </div>
        </div>
    }
}

/// Large soft glow that drifts after the pointer
#[component]
pub fn CursorGlow() -> impl IntoView {
    let scroll = use_scroll_context();
    let glow_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::effects::dom::{has_coarse_pointer, prefers_reduced_motion, set_style, start_frame_loop};

        Effect::new(move |_| {
            if has_coarse_pointer() || prefers_reduced_motion() {
                return;
            }

            let mut position = scroll.pointer.get_untracked();
            let frames = start_frame_loop(move |_, dt| {
                position = lerp_vec(position, scroll.pointer.get_untracked(), smoothing(0.08, dt));
                if let Some(glow) = glow_ref.get_untracked() {
                    set_style(&glow, "transform", &position.to_translate());
                    set_style(&glow, "opacity", "1");
                }
                true
            });

            on_cleanup(move || frames.stop());
        });
    }

    view! {
        <div class="cursor-glow-layer" aria-hidden="true">
            <div node_ref=glow_ref class="cursor-glow"></div>
        </div>
    }
}
