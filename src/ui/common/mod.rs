//! Common reusable UI components
//!
//! Small building blocks shared by the sections.

pub mod form;
pub mod message;
pub mod spinner;

pub use form::{FormField, FormHint, TextAreaField};
pub use message::{ErrorMessage, SuccessMessage};
pub use spinner::{InlineSpinner, Spinner, SpinnerSize};
