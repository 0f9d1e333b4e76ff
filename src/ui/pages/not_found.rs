//! Not found page component

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        // Tell the server integration to answer with 404 rather than 200
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page not found - Northwind Studio" />

        <div class="not-found">
            <div class="not-found-body">
                <div class="not-found-icon">
                    <Icon name=icons::ALERT_CIRCLE class="w-12 h-12" />
                </div>

                <h1 class="not-found-code">"404"</h1>
                <h2 class="section-title">"Page not found"</h2>
                <p class="section-subtitle">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-primary">"Back to home"</A>
            </div>

            <p class="not-found-footer">"© 2025 Northwind Studio"</p>
        </div>
    }
}
