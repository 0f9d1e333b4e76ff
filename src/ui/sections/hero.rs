use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::motion::parallax_offset;
use crate::ui::effects::use_scroll_context;
use crate::ui::icon::{Icon, icons};

/// Opening section with headline and calls to action
#[component]
pub fn HeroSection() -> impl IntoView {
    let scroll = use_scroll_context();

    // Content drifts up slower than the page and fades as the hero leaves
    let content_style = move || {
        let y = scroll.scroll_y.get();
        let fade = (1.0 - y / scroll.viewport_height.get().max(1.0)).clamp(0.0, 1.0);
        format!(
            "transform: translate3d(0, {:.1}px, 0); opacity: {:.3};",
            -parallax_offset(y, 0.35),
            fade
        )
    };
    let orb_style = move || {
        format!(
            "transform: translate3d(0, {:.1}px, 0);",
            parallax_offset(scroll.scroll_y.get(), 0.15)
        )
    };

    view! {
        <section id=SectionId::Home.as_str() class="section hero">
            <div class="hero-orb" style=orb_style aria-hidden="true"></div>

            <div class="container hero-content" style=content_style>
                <p class="eyebrow hero-fade-in">"Digital product studio"</p>
                <h1 class="hero-title hero-fade-in hero-delay-1">
                    "We design and build "
                    <span class="text-gradient">"software people love"</span>
                    " to use."
                </h1>
                <p class="hero-subtitle hero-fade-in hero-delay-2">
                    "Northwind is a small, senior team turning ambitious ideas into fast, reliable web and mobile products."
                </p>
                <div class="hero-actions hero-fade-in hero-delay-3">
                    <a href=SectionId::Contact.href() class="btn-primary" data-cursor-hover="">
                        "Start a project"
                        <Icon name=icons::ARROW_RIGHT class="icon-text" />
                    </a>
                    <a href=SectionId::Portfolio.href() class="btn-secondary" data-cursor-hover="">
                        "See our work"
                    </a>
                </div>
            </div>

            <a href=SectionId::About.href() class="hero-scroll-indicator" aria-label="Scroll to about section">
                <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
            </a>
        </section>
    }
}
