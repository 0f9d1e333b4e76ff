use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file under `/icons`, without the .svg extension)
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
#[allow(dead_code)]
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CLOUD: &str = "cloud";
    pub const CODE: &str = "code";
    pub const INFO: &str = "info";
    pub const MAIL: &str = "mail";
    pub const MENU: &str = "menu";
    pub const MOBILE: &str = "mobile";
    pub const PALETTE: &str = "palette";
    pub const QUOTE: &str = "quote";
    pub const SHIELD: &str = "shield";
    pub const SPARK: &str = "spark";
    pub const X: &str = "x";
}
