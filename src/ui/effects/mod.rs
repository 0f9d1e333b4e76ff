//! Decorative effects: cursor overlays, backgrounds and scroll reveals

pub mod background;
pub mod cursor;
#[cfg(not(feature = "ssr"))]
pub mod dom;
pub mod reveal;
pub mod scroll;

pub use background::{AnimatedShapes, ParticleBackground};
pub use cursor::{CursorGlow, CustomCursor};
pub use reveal::{REVEAL_CLASS, ScrollReveal};
pub use scroll::{ScrollContext, provide_scroll_context, use_scroll_context};
