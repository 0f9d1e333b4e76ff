use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner-sm",
            SpinnerSize::Medium => "spinner-md",
        }
    }
}

/// Circular loading spinner
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("spinner {} {}", size.class(), class) role="status" aria-live="polite">
            <span class="spinner-circle"></span>
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}

/// Small spinner for use inside buttons
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <Spinner size=SpinnerSize::Small class="spinner-inline" /> }
}
