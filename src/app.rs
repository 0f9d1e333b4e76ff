use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::Config;
use crate::core::config::API_BASE_META;
use crate::ui::{LandingPage, NotFoundPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Routes get the config as context; the file/error fallback does not
    let config = use_context::<Config>().unwrap_or_else(shell_config);
    let api_base_url = config.published_api_base_url().to_string();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base_url/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(feature = "ssr")]
fn shell_config() -> Config {
    Config::from_env()
}

#[cfg(not(feature = "ssr"))]
fn shell_config() -> Config {
    Config::from_document()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    if use_context::<Config>().is_none() {
        provide_context(shell_config());
    }

    #[cfg(not(feature = "ssr"))]
    load_fonts();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/northwind-studio.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LandingPage />
            </Routes>
        </Router>
    }
}

/// Wait for web fonts so the first paint after the loader uses them.
/// Failures only get logged.
#[cfg(not(feature = "ssr"))]
fn load_fonts() {
    use leptos::task::spawn_local;
    use wasm_bindgen_futures::JsFuture;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    match document.fonts().ready() {
        Ok(ready) => spawn_local(async move {
            if let Err(err) = JsFuture::from(ready).await {
                leptos::logging::warn!("font loading failed: {:?}", err);
            }
        }),
        Err(err) => leptos::logging::warn!("font loading unavailable: {:?}", err),
    }
}
