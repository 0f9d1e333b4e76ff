use leptos::html;
use leptos::prelude::*;

use crate::core::SectionId;
use crate::core::content::{STATS, Stat};

/// Count-up length for the statistics
#[cfg(not(feature = "ssr"))]
const COUNT_UP_MS: f64 = 1800.0;

/// Studio introduction with headline numbers
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="section about">
            <div class="container about-grid">
                <div class="reveal">
                    <p class="eyebrow">"About us"</p>
                    <h2 class="section-title">"A studio built around craft, not headcount."</h2>
                </div>
                <div class="about-copy reveal reveal-delay-1">
                    <p>
                        "We started Northwind because we were tired of hand-offs. The people who plan your product are the people who design it and ship it."
                    </p>
                    <p>
                        "That keeps decisions close to the work, estimates honest and quality high, from the first workshop to the last deploy."
                    </p>
                </div>
            </div>

            <div class="container stats-grid">
                {STATS
                    .iter()
                    .enumerate()
                    .map(|(index, stat)| view! { <StatCounter stat=*stat index=index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Number that counts up the first time it scrolls into view
#[component]
fn StatCounter(stat: Stat, index: usize) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let shown = RwSignal::new(0u32);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::motion::count_up;
        use crate::ui::effects::dom::{FrameLoop, drive_frame_loop, on_first_visible, prefers_reduced_motion};
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        Effect::new(move |_| {
            let Some(el) = node_ref.get() else {
                return;
            };

            if prefers_reduced_motion() {
                shown.set(stat.value);
                return;
            }

            // The loop starts later, so the handle exists up front for cleanup
            let frames = FrameLoop::new();
            on_cleanup({
                let frames = frames.clone();
                move || frames.stop()
            });

            on_first_visible(el.into(), 0.4, move || {
                spawn_local(async move {
                    // Stagger neighbours
                    TimeoutFuture::new(index as u32 * 150).await;

                    let mut started: Option<f64> = None;
                    drive_frame_loop(&frames, move |now, _| {
                        let start = *started.get_or_insert(now);
                        let value = count_up(stat.value, now - start, COUNT_UP_MS);
                        shown.set(value);
                        value < stat.value
                    });
                });
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = index;
    }

    view! {
        <div node_ref=node_ref class="stat reveal">
            <div class="stat-value">
                {move || shown.get()}
                <span class="text-accent">{stat.suffix}</span>
            </div>
            <div class="stat-label">{stat.label}</div>
        </div>
    }
}
