use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{Carousel, TESTIMONIALS};
use crate::ui::icon::{Icon, icons};

/// Auto-advance interval for the carousel
#[cfg(not(feature = "ssr"))]
const AUTO_ADVANCE_MS: u64 = 6000;

/// Client quotes in a carousel
#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let index = Memo::new(move |_| carousel.with(|c| c.index()));
    let paused = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use std::time::Duration;

        Effect::new(move |_| {
            let handle = set_interval_with_handle(
                move || {
                    if !paused.get_untracked() {
                        carousel.update(|c| {
                            c.next();
                        });
                    }
                },
                Duration::from_millis(AUTO_ADVANCE_MS),
            );

            if let Ok(handle) = handle {
                on_cleanup(move || handle.clear());
            }
        });
    }

    view! {
        <section id=SectionId::Testimonials.as_str() class="section testimonials">
            <div class="container">
                <div class="section-header reveal">
                    <p class="eyebrow">"Clients"</p>
                    <h2 class="section-title">"Kind words from good people"</h2>
                </div>

                <Show
                    when=move || !TESTIMONIALS.is_empty()
                    fallback=|| view! { <p class="card-text text-center">"Testimonials coming soon."</p> }
                >
                    <div
                        class="testimonial-stage reveal"
                        on:mouseenter=move |_| paused.set(true)
                        on:mouseleave=move |_| paused.set(false)
                    >
                        {TESTIMONIALS
                            .iter()
                            .enumerate()
                            .map(|(i, testimonial)| {
                                view! {
                                    <figure
                                        class="testimonial"
                                        class:testimonial-active=move || index.get() == i
                                        aria-hidden=move || (index.get() != i).to_string()
                                    >
                                        <Icon name=icons::QUOTE class="testimonial-quote-icon" />
                                        <blockquote class="testimonial-quote">{testimonial.quote}</blockquote>
                                        <figcaption class="testimonial-author">
                                            <span class="testimonial-name">{testimonial.author}</span>
                                            <span class="testimonial-role">
                                                {format!("{}, {}", testimonial.role, testimonial.company)}
                                            </span>
                                        </figcaption>
                                    </figure>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="carousel-controls">
                        <button
                            class="carousel-button"
                            aria-label="Previous testimonial"
                            on:click=move |_| carousel.update(|c| {
                                c.prev();
                            })
                        >
                            <Icon name=icons::ARROW_LEFT class="w-5 h-5" />
                        </button>
                        <div class="carousel-dots">
                            {(0..TESTIMONIALS.len())
                                .map(|i| {
                                    view! {
                                        <button
                                            class="carousel-dot"
                                            class:carousel-dot-active=move || index.get() == i
                                            aria-label=format!("Show testimonial {}", i + 1)
                                            on:click=move |_| carousel.update(|c| {
                                                c.go_to(i);
                                            })
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            class="carousel-button"
                            aria-label="Next testimonial"
                            on:click=move |_| carousel.update(|c| {
                                c.next();
                            })
                        >
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5" />
                        </button>
                    </div>
                </Show>
            </div>
        </section>
    }
}
