//! Intro loading screen
//!
//! Plays the loader timeline once, then fades out and calls `on_complete`.

use leptos::prelude::*;

use crate::core::loader::{DEFAULT_DURATION_MS, DEFAULT_EXIT_MS, LoaderPhase, LoaderTimeline};

#[component]
pub fn LoadingScreen(
    /// Called exactly once when the loader has finished
    on_complete: Callback<()>,
    /// Progress animation length in milliseconds
    #[prop(default = DEFAULT_DURATION_MS)]
    duration_ms: f64,
    /// Fade-out length in milliseconds
    #[prop(default = DEFAULT_EXIT_MS)]
    exit_ms: f64,
) -> impl IntoView {
    let initial = LoaderTimeline::new(duration_ms, exit_ms);
    let percent = RwSignal::new(initial.percent());
    let caption = RwSignal::new(initial.caption());
    let phase = RwSignal::new(initial.phase());

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::effects::dom::start_frame_loop;

        Effect::new(move |_| {
            let mut timeline = LoaderTimeline::new(duration_ms, exit_ms);

            let frames = start_frame_loop(move |now, _| {
                let finished = timeline.tick(now);

                percent.set(timeline.percent());
                caption.set(timeline.caption());
                phase.set(timeline.phase());

                if finished {
                    on_complete.run(());
                }
                // Stop the loop on the completion frame so the callback cannot fire again
                !finished
            });

            on_cleanup(move || frames.stop());
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = on_complete;
    }

    view! {
        <div
            class="loader"
            class:loader-exit=move || phase.get() != LoaderPhase::Running
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || percent.get()
        >
            <div class="loader-inner">
                <div class="loader-brand">"Northwind"<span class="text-accent">"."</span></div>
                <div class="loader-counter">{move || format!("{:03}", percent.get())}</div>
                <div class="loader-track">
                    <div
                        class="loader-fill"
                        style=move || format!("transform: scaleX({:.3});", f64::from(percent.get()) / 100.0)
                    ></div>
                </div>
                <div class="loader-caption">{move || caption.get()}</div>
            </div>
        </div>
    }
}
