//! Shared scroll and pointer state
//!
//! One window listener per event feeds signals that the navigation bar,
//! parallax layers and hero read from.

use leptos::prelude::*;

use crate::core::Vec2;

/// Scroll offset past which the navigation bar switches to its solid style
pub const SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy)]
pub struct ScrollContext {
    /// Vertical scroll offset in CSS pixels
    pub scroll_y: RwSignal<f64>,
    /// Viewport height in CSS pixels
    pub viewport_height: RwSignal<f64>,
    /// Last pointer position in viewport coordinates
    pub pointer: RwSignal<Vec2>,
}

impl ScrollContext {
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y.get() > SCROLLED_THRESHOLD
    }
}

/// Provide the scroll context and wire the window listeners
pub fn provide_scroll_context() -> ScrollContext {
    let ctx = ScrollContext {
        scroll_y: RwSignal::new(0.0),
        viewport_height: RwSignal::new(800.0),
        pointer: RwSignal::new(Vec2::ZERO),
    };

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{mousemove, resize, scroll};

        let read_scroll = move || {
            if let Some(window) = web_sys::window() {
                if let Ok(y) = window.scroll_y() {
                    ctx.scroll_y.set(y);
                }
                if let Some(h) = window.inner_height().ok().and_then(|v| v.as_f64()) {
                    ctx.viewport_height.set(h);
                }
            }
        };
        read_scroll();

        let handle_scroll = window_event_listener(scroll, move |_| read_scroll());
        let handle_resize = window_event_listener(resize, move |_| read_scroll());
        let handle_pointer = window_event_listener(mousemove, move |ev| {
            ctx.pointer
                .set(Vec2::new(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });

        on_cleanup(move || {
            handle_scroll.remove();
            handle_resize.remove();
            handle_pointer.remove();
        });
    }

    provide_context(ctx);
    ctx
}

pub fn use_scroll_context() -> ScrollContext {
    use_context::<ScrollContext>().expect("ScrollContext should be provided")
}
