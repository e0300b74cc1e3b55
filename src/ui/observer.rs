//! Browser observers and listeners that live as long as a component
//!
//! Closures handed to the DOM are kept alive in the reactive owner and torn
//! down in `on_cleanup`, so nothing is leaked with `forget()`.

use leptos::prelude::*;
use leptos::web_sys;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Keep `value` alive until the current owner is cleaned up, then drop it
pub fn hold_until_cleanup<T: 'static>(value: T) {
    let slot = StoredValue::new_local(Some(value));
    on_cleanup(move || {
        slot.try_update_value(|value| value.take());
    });
}

/// IntersectionObserver plus its callback. Disconnects on drop.
pub struct IntersectionHandle {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for IntersectionHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl IntersectionHandle {
    pub fn unobserve(&self, target: &web_sys::Element) {
        self.observer.unobserve(target);
    }
}

/// Observe `targets` with the given root margin. `on_entry` runs for every
/// entry the browser reports.
pub fn observe_intersections<F>(
    targets: &[web_sys::Element],
    root_margin: &str,
    threshold: f64,
    mut on_entry: F,
) -> Option<IntersectionHandle>
where
    F: FnMut(&web_sys::IntersectionObserverEntry, &web_sys::IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));

    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .ok()?;

    for target in targets {
        observer.observe(target);
    }

    Some(IntersectionHandle {
        observer,
        _callback: callback,
    })
}

/// ResizeObserver plus its callback. Disconnects on drop.
pub struct ResizeHandle {
    observer: web_sys::ResizeObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>,
}

impl Drop for ResizeHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `on_resize` whenever `target` changes size
pub fn observe_resize<F>(target: &web_sys::Element, mut on_resize: F) -> Option<ResizeHandle>
where
    F: FnMut() + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::ResizeObserver)>::new(
        move |_: js_sys::Array, _: web_sys::ResizeObserver| on_resize(),
    );

    let observer = web_sys::ResizeObserver::new(callback.as_ref().unchecked_ref()).ok()?;
    observer.observe(target);

    Some(ResizeHandle {
        observer,
        _callback: callback,
    })
}

/// Current viewport width in CSS pixels
pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}
