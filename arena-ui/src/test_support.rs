use dioxus::core::ReactiveContext;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn empty_app() -> Element {
    VNode::empty()
}

/// Run `f` inside a live Dioxus runtime so stores can be created and written.
pub(crate) fn in_runtime<R>(f: impl FnOnce() -> R) -> R {
    let dom = VirtualDom::new(empty_app);
    dom.in_scope(ScopeId::ROOT, f)
}

/// A reader that counts how many times it was marked dirty
#[track_caller]
pub(crate) fn counting_context(counter: Arc<AtomicUsize>) -> ReactiveContext {
    ReactiveContext::new_with_callback(
        move || {
            counter.fetch_add(1, Ordering::Relaxed);
        },
        ScopeId::ROOT,
        std::panic::Location::caller(),
    )
}
