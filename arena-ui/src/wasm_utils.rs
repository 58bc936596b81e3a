//! Browser interop helpers (wasm32 only)
//!
//! Listeners are attached through a `Closure` that must live as long as the
//! listener. Rather than `closure.forget()`, the closure is owned by a struct
//! whose `Drop` removes the listener, so the listener's lifetime follows
//! Rust ownership (e.g. a hook value dropped with its component).

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Current `window.innerWidth` in CSS pixels
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// A `window` event listener removed on drop.
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowEventListener {
    /// Returns `None` when there is no window (workers, server-side rendering).
    pub fn new(event_name: &'static str, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback: Closure<dyn FnMut()> = Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            window,
            event_name,
            callback,
        })
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
