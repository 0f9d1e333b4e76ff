//! Browser plumbing shared by the effects: animation frames and intersection
//! observers. Client-only.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Handle to a running `requestAnimationFrame` loop.
///
/// Cheap to clone and `Send`, so it can be stopped from `on_cleanup`.
#[derive(Clone, Debug)]
pub struct FrameLoop {
    running: Arc<AtomicBool>,
}

impl FrameLoop {
    /// Handle in the running state with no loop attached yet.
    ///
    /// Lets a component register cleanup before a deferred loop starts.
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Call `tick(now_ms, dt_ms)` every animation frame until it returns `false`
/// or the returned handle is stopped.
pub fn start_frame_loop(tick: impl FnMut(f64, f64) -> bool + 'static) -> FrameLoop {
    let handle = FrameLoop::new();
    drive_frame_loop(&handle, tick);
    handle
}

/// Attach a frame loop to an existing handle. Does nothing if it was already stopped.
pub fn drive_frame_loop(handle: &FrameLoop, mut tick: impl FnMut(f64, f64) -> bool + 'static) {
    if !handle.is_running() {
        return;
    }
    let running = handle.running.clone();

    let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let slot_inner = slot.clone();
    let mut last: Option<f64> = None;

    *slot.borrow_mut() = Some(Closure::new(move |now: f64| {
        if !running.load(Ordering::Relaxed) {
            return;
        }

        let dt = last.map(|previous| now - previous).unwrap_or(0.0);
        last = Some(now);

        if !tick(now, dt) {
            running.store(false, Ordering::Relaxed);
            return;
        }

        if let Some(callback) = slot_inner.borrow().as_ref() {
            request_frame(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_frame(callback);
    }
}

/// Observe `targets` and call `on_entry` for every intersection change.
///
/// The callback closure is leaked; the observer lives as long as it has targets.
pub fn observe_intersections(
    targets: &[Element],
    thresholds: &[f64],
    root_margin: &str,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    );

    let thresholds_js = js_sys::Array::new();
    for threshold in thresholds {
        thresholds_js.push(&JsValue::from_f64(*threshold));
    }

    let init = IntersectionObserverInit::new();
    init.set_threshold(&thresholds_js);
    init.set_root_margin(root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }

    Some(observer)
}

/// Run `action` once, the first time `element` scrolls into view
pub fn on_first_visible(element: Element, threshold: f64, action: impl FnOnce() + 'static) {
    let action = RefCell::new(Some(action));
    observe_intersections(
        &[element],
        &[threshold],
        "0px",
        move |entry, observer| {
            if entry.is_intersecting() {
                observer.unobserve(&entry.target());
                if let Some(action) = action.borrow_mut().take() {
                    action();
                }
            }
        },
    );
}

/// All elements matching `selector`
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// True when the visitor asked the system for reduced motion
pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

/// True on touch-first devices where a custom cursor makes no sense
pub fn has_coarse_pointer() -> bool {
    media_matches("(pointer: coarse)")
}

fn media_matches(query: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Write one inline style property, ignoring failures
pub fn set_style(element: &web_sys::HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}
