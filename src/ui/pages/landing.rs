//! Landing page component
//!
//! The single page of the site. The intro loader plays first; the navigation,
//! sections and decorative overlays mount once it reports completion.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::effects::{
    AnimatedShapes, CursorGlow, CustomCursor, ParticleBackground, ScrollReveal, provide_scroll_context,
};
use crate::ui::loading_screen::LoadingScreen;
use crate::ui::navbar::Navbar;
use crate::ui::sections::{
    AboutSection, ContactSection, FaqSection, Footer, HeroSection, PortfolioSection, ProcessSection,
    SolutionsSection, TestimonialsSection,
};

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_scroll_context();

    let (loaded, set_loaded) = signal(false);
    let on_loaded = Callback::new(move |_: ()| set_loaded.set(true));

    view! {
        // SEO Meta Tags
        <SeoMeta />

        <Show when=move || !loaded.get()>
            <LoadingScreen on_complete=on_loaded />
        </Show>

        <Show when=move || loaded.get()>
            // Decorative layers sit behind the content and ignore pointer events
            <ParticleBackground />
            <AnimatedShapes />
            <CursorGlow />
            <CustomCursor />

            <Navbar />

            <main class="page">
                <HeroSection />
                <AboutSection />
                <ProcessSection />
                <SolutionsSection />
                <PortfolioSection />
                <TestimonialsSection />
                <FaqSection />
                <ContactSection />
            </main>

            <Footer />
            <ScrollReveal />
        </Show>
    }
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Northwind Studio - Web and Mobile Product Studio" />

        <Meta name="description" content="Northwind is a product studio that designs and builds fast, beautiful web and mobile apps. Tell us about your project and we will get back to you within a day." />
        <Meta name="keywords" content="product studio, web development, mobile apps, UI design, e-commerce, software agency" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://northwind.studio/" />
        <Meta property="og:title" content="Northwind Studio - Web and Mobile Product Studio" />
        <Meta property="og:description" content="We design and build fast, beautiful web and mobile products." />
        <Meta property="og:image" content="https://northwind.studio/og-image.png" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://northwind.studio/" />
        <Meta property="twitter:title" content="Northwind Studio - Web and Mobile Product Studio" />
        <Meta property="twitter:description" content="We design and build fast, beautiful web and mobile products." />
        <Meta property="twitter:image" content="https://northwind.studio/og-image.png" />

        <Link rel="canonical" href="https://northwind.studio/" />

        <script type="application/ld+json" inner_html=r#"{"@context":"https://schema.org","@type":"Organization","name":"Northwind Studio","url":"https://northwind.studio","logo":"https://northwind.studio/favicon.svg","email":"hello@northwind.studio","description":"Product studio designing and building web and mobile applications","sameAs":["https://github.com/northwind-studio","https://www.linkedin.com/company/northwind-studio"]}"#></script>
    }
}
