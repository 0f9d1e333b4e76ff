//! Core site logic: content, timelines and the lead pipeline, free of DOM types

pub mod config;
pub mod content;
pub mod lead;
pub mod loader;
pub mod motion;
pub mod particles;
pub mod sections;

pub use config::Config;
pub use lead::{ContactFields, ContactForm, FormStatus, LeadError, LeadTransport};
pub use loader::{LoaderPhase, LoaderTimeline};
pub use motion::{Spring, Vec2};
pub use particles::ParticleField;
pub use sections::{SectionId, SectionTracker};
