mod support;
use crate::support::with_loaded_store;
use arena_ui::{
    LayoutMetrics, MemoryPreferences, NavPanelState, ShellIntent, ShellLayout, ToggleAction,
    UiStore, ViewportClass,
};
use dioxus::core::ReactiveContext;
use dioxus::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn render(store: &UiStore, viewport: ViewportClass) -> ShellLayout {
    ShellLayout::derive(&store.snapshot(), viewport, &LayoutMetrics::default())
}

#[test]
fn test_narrow_overlay_dismissal() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        let store = root.ui;
        store.set_sidebar_open(true);

        let before = render(&store, ViewportClass::Narrow);
        assert!(before.show_dismiss_overlay);
        assert_eq!(before.panel, NavPanelState::Expanded);

        // One click on the overlay
        ShellIntent::DismissOverlay.apply(&store);

        assert!(!store.sidebar_open());
        let after = render(&store, ViewportClass::Narrow);
        assert!(!after.show_dismiss_overlay);
        assert_eq!(after.panel, NavPanelState::HiddenOverlay);
    });
}

#[test]
fn test_overlay_click_is_one_transition() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        let store = root.ui;
        let calls = Arc::new(AtomicUsize::new(0));
        let reader = ReactiveContext::new_with_callback(
            {
                let calls = calls.clone();
                move || {
                    calls.fetch_add(1, Ordering::Relaxed);
                }
            },
            ScopeId::ROOT,
            std::panic::Location::caller(),
        );
        reader.run_in(|| store.snapshot());

        ShellIntent::DismissOverlay.apply(&store);
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    });
}

#[test]
fn test_overlay_stays_mounted_but_inert_once_dismissed() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        let store = root.ui;
        ShellIntent::DismissOverlay.apply(&store);

        let hidden = render(&store, ViewportClass::Narrow);
        assert!(hidden.mount_dismiss_overlay);
        assert!(!hidden.show_dismiss_overlay);
        assert!(hidden.overlay_style().contains("pointer-events: none"));

        ShellIntent::OpenMenu.apply(&store);
        let shown = render(&store, ViewportClass::Narrow);
        assert!(shown.overlay_style().contains("opacity: 1; pointer-events: auto"));
    });
}

#[test]
fn test_wide_collapse_moves_to_rail() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        let store = root.ui;
        let metrics = LayoutMetrics::default();

        let expanded = render(&store, ViewportClass::Wide);
        assert_eq!(expanded.panel, NavPanelState::Expanded);
        assert_eq!(expanded.content_offset_px, metrics.expanded_width_px);
        assert_eq!(expanded.toggle_action, ToggleAction::Collapse);

        store.toggle_sidebar();

        let collapsed = render(&store, ViewportClass::Wide);
        assert_eq!(collapsed.panel, NavPanelState::CollapsedRail);
        assert_eq!(collapsed.content_offset_px, metrics.rail_width_px);
        assert_eq!(collapsed.toggle_action, ToggleAction::Expand);
        assert!(collapsed.show_collapse_toggle);
    });
}

#[test]
fn test_same_flag_maps_by_viewport_at_render_time() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        let store = root.ui;
        // Collapsed while wide, then the window shrinks
        store.set_sidebar_open(false);
        assert_eq!(
            render(&store, ViewportClass::Wide).panel,
            NavPanelState::CollapsedRail
        );
        assert_eq!(
            render(&store, ViewportClass::Narrow).panel,
            NavPanelState::HiddenOverlay
        );

        // Opened while narrow, then the window grows
        ShellIntent::OpenMenu.apply(&store);
        let wide = render(&store, ViewportClass::Wide);
        assert_eq!(wide.panel, NavPanelState::Expanded);
        assert!(!wide.show_dismiss_overlay);
    });
}

#[test]
fn test_viewport_width_classification_drives_layout() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        let store = root.ui;
        let metrics = LayoutMetrics::default();

        let phone = ShellLayout::derive(&store.snapshot(), metrics.classify(Some(390.0)), &metrics);
        let desktop = ShellLayout::derive(&store.snapshot(), metrics.classify(Some(1440.0)), &metrics);

        assert_eq!(phone.content_offset_px, 0);
        assert!(phone.show_dismiss_overlay);
        assert_eq!(desktop.content_offset_px, metrics.expanded_width_px);
        assert!(!desktop.show_dismiss_overlay);
    });
}
