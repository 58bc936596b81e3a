//! Hooks connecting components to the root store and the browser viewport

use crate::components::layout_shell::{LayoutMetrics, ViewportClass};
use crate::stores::{RootStore, UiState, UiStore};
use dioxus::prelude::*;

/// The root store provided by the app's composition root
pub fn use_root_store() -> RootStore {
    use_context::<RootStore>()
}

pub fn use_ui_store() -> UiStore {
    use_root_store().ui
}

/// Current UI state. Reading it subscribes the calling component to the
/// whole UI slice, so it re-renders after every transition.
pub fn use_ui_state() -> UiState {
    use_ui_store().snapshot()
}

/// Viewport class, re-evaluated whenever the window is resized.
///
/// Off-browser there is no width to read and the viewport counts as wide.
pub fn use_viewport_class(metrics: LayoutMetrics) -> ViewportClass {
    let width = use_viewport_width();
    metrics.classify(width)
}

#[cfg(target_arch = "wasm32")]
fn use_viewport_width() -> Option<f64> {
    use crate::wasm_utils::{viewport_width, WindowEventListener};
    use std::rc::Rc;

    let mut width = use_signal(viewport_width);

    use_hook(|| {
        let listener = WindowEventListener::new("resize", move || {
            let current = viewport_width();
            if *width.peek() != current {
                width.set(current);
            }
        });
        Rc::new(listener)
    });

    width()
}

#[cfg(not(target_arch = "wasm32"))]
fn use_viewport_width() -> Option<f64> {
    None
}
