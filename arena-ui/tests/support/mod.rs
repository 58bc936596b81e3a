use arena_ui::{MemoryPreferences, RootStore};
use dioxus::prelude::*;

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .try_init();
}

fn empty_app() -> Element {
    VNode::empty()
}

/// Run `f` in a fresh runtime. Store handles created inside live until it returns.
#[allow(dead_code)]
pub fn in_runtime<R>(f: impl FnOnce() -> R) -> R {
    tracing_init();
    let dom = VirtualDom::new(empty_app);
    dom.in_scope(ScopeId::ROOT, f)
}

/// Fresh store over shared in-memory preferences, as on a page (re)load
#[allow(dead_code)]
pub fn with_loaded_store<R>(preferences: &MemoryPreferences, f: impl FnOnce(RootStore) -> R) -> R {
    in_runtime(|| f(RootStore::new(preferences.clone())))
}
