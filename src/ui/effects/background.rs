//! Page backgrounds: parallax shapes and the particle canvas

use leptos::html;
use leptos::prelude::*;

use crate::core::motion::parallax_offset;
use crate::ui::effects::scroll::use_scroll_context;

/// Blurred decorative shape: position in viewport percent, size in px,
/// parallax factor and colour class.
struct Shape {
    top: f64,
    left: f64,
    size: u32,
    factor: f64,
    class: &'static str,
}

const SHAPES: &[Shape] = &[
    Shape { top: 8.0, left: 6.0, size: 420, factor: 0.12, class: "shape-violet" },
    Shape { top: 30.0, left: 70.0, size: 360, factor: -0.08, class: "shape-cyan" },
    Shape { top: 62.0, left: 18.0, size: 300, factor: 0.2, class: "shape-pink" },
    Shape { top: 85.0, left: 80.0, size: 460, factor: 0.05, class: "shape-violet" },
];

/// Floating blurred shapes that drift against the scroll direction
#[component]
pub fn AnimatedShapes() -> impl IntoView {
    let scroll = use_scroll_context();

    view! {
        <div class="shapes-layer" aria-hidden="true">
            {SHAPES
                .iter()
                .map(|shape| {
                    let factor = shape.factor;
                    let base = format!(
                        "top: {}%; left: {}%; width: {}px; height: {}px;",
                        shape.top, shape.left, shape.size, shape.size
                    );
                    view! {
                        <div
                            class=format!("shape {}", shape.class)
                            style=move || format!(
                                "{} transform: translate3d(0, {:.1}px, 0);",
                                base,
                                parallax_offset(scroll.scroll_y.get(), factor)
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Full-page canvas with drifting, linked particles
#[component]
pub fn ParticleBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::core::ParticleField;
        use crate::ui::effects::dom::{prefers_reduced_motion, start_frame_loop};
        use leptos::ev::resize;
        use wasm_bindgen::JsCast;
        use web_sys::CanvasRenderingContext2d;

        Effect::new(move |_| {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            let Some(ctx) = canvas
                .get_context("2d")
                .ok()
                .flatten()
                .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            else {
                return;
            };

            let viewport = || {
                web_sys::window()
                    .map(|w| {
                        (
                            w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1280.0),
                            w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
                        )
                    })
                    .unwrap_or((1280.0, 800.0))
            };

            let (width, height) = viewport();
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);

            let field = Rc::new(RefCell::new(ParticleField::new(
                width,
                height,
                js_sys::Date::now() as u64,
            )));

            let draw = Rc::new({
                let field = field.clone();
                move || {
                    let field = field.borrow();
                    let (w, h) = field.size();
                    ctx.clear_rect(0.0, 0.0, w, h);

                    ctx.set_line_width(1.0);
                    for link in field.links() {
                        ctx.set_stroke_style_str(&format!(
                            "rgba(148, 163, 255, {:.3})",
                            link.strength * 0.25
                        ));
                        ctx.begin_path();
                        ctx.move_to(link.from.x, link.from.y);
                        ctx.line_to(link.to.x, link.to.y);
                        ctx.stroke();
                    }

                    ctx.set_fill_style_str("rgba(196, 205, 255, 0.6)");
                    for p in field.particles() {
                        ctx.begin_path();
                        let _ = ctx.arc(
                            p.position.x,
                            p.position.y,
                            p.radius,
                            0.0,
                            std::f64::consts::TAU,
                        );
                        ctx.fill();
                    }
                }
            });

            // Without a frame loop, resizing clears the canvas until redrawn
            let reduced_motion = prefers_reduced_motion();

            let handle_resize = {
                let field = field.clone();
                let canvas = canvas.clone();
                let draw = draw.clone();
                window_event_listener(resize, move |_| {
                    let (w, h) = viewport();
                    canvas.set_width(w as u32);
                    canvas.set_height(h as u32);
                    field.borrow_mut().resize(w, h);
                    if reduced_motion {
                        draw();
                    }
                })
            };

            if reduced_motion {
                draw();
                on_cleanup(move || handle_resize.remove());
                return;
            }

            let frames = start_frame_loop(move |_, dt| {
                field.borrow_mut().step(dt);
                draw();
                true
            });

            on_cleanup(move || {
                frames.stop();
                handle_resize.remove();
            });
        });
    }

    view! {
        <canvas node_ref=canvas_ref class="particle-canvas" aria-hidden="true"></canvas>
    }
}
