mod support;
use crate::support::{in_runtime, with_loaded_store};
use arena_ui::{MemoryPreferences, NoPreferences, RootStore, Theme, UiState, THEME_KEY};

#[test]
fn test_sidebar_toggle_parity_over_long_sequences() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        let store = root.ui;
        let initial = store.sidebar_open();
        for n in 1..=40 {
            store.toggle_sidebar();
            let expected = if n % 2 == 0 { initial } else { !initial };
            assert_eq!(store.sidebar_open(), expected, "after {} toggles", n);
        }
    });
}

#[test]
fn test_set_sidebar_open_reads_back() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        for value in [false, false, true, true, false] {
            root.ui.set_sidebar_open(value);
            assert_eq!(root.ui.sidebar_open(), value);
        }
    });
}

#[test]
fn test_theme_survives_restart() {
    let prefs = MemoryPreferences::new();

    with_loaded_store(&prefs, |root| root.ui.set_theme(Theme::Light));
    assert_eq!(with_loaded_store(&prefs, |root| root.ui.theme()), Theme::Light);

    with_loaded_store(&prefs, |root| root.ui.set_theme(Theme::Dark));
    assert_eq!(with_loaded_store(&prefs, |root| root.ui.theme()), Theme::Dark);
}

#[test]
fn test_flags_reset_on_restart() {
    let prefs = MemoryPreferences::new();
    with_loaded_store(&prefs, |root| {
        root.ui.set_sidebar_open(false);
        root.ui.set_command_palette_open(true);
    });

    with_loaded_store(&prefs, |reloaded| {
        assert!(reloaded.ui.sidebar_open());
        assert!(!reloaded.ui.command_palette_open());
    });
}

#[test]
fn test_toggle_theme_twice_writes_twice() {
    let prefs = MemoryPreferences::new();
    with_loaded_store(&prefs, |root| {
        let original = root.ui.theme();

        root.ui.toggle_theme();
        root.ui.toggle_theme();

        assert_eq!(root.ui.theme(), original);
    });
    assert_eq!(
        prefs.writes(),
        vec![
            (THEME_KEY.to_string(), "light".to_string()),
            (THEME_KEY.to_string(), "dark".to_string()),
        ]
    );
}

#[test]
fn test_unavailable_storage_defaults_dark_and_never_fails() {
    in_runtime(|| {
        let store = RootStore::new(NoPreferences).ui;
        assert_eq!(store.theme(), Theme::Dark);

        store.toggle_sidebar();
        store.set_sidebar_open(true);
        store.toggle_command_palette();
        store.set_command_palette_open(false);
        store.toggle_theme();
        store.set_theme(Theme::Dark);
        assert_eq!(store.snapshot(), UiState::default());
    });
}

#[test]
fn test_rejected_writes_do_not_block_transitions() {
    let prefs = MemoryPreferences::with_value(THEME_KEY, "dark");
    with_loaded_store(&prefs, |root| {
        prefs.set_reject_writes(true);

        root.ui.toggle_theme();

        assert_eq!(root.ui.theme(), Theme::Light);
    });
    assert_eq!(prefs.value(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn test_unrecognized_stored_theme_is_kept_verbatim() {
    let prefs = MemoryPreferences::with_value(THEME_KEY, "midnight");
    let theme = with_loaded_store(&prefs, |root| root.ui.theme());
    assert_eq!(theme.as_str(), "midnight");
    assert!(prefs.writes().is_empty());
}

#[test]
fn test_root_store_shares_one_ui_state() {
    with_loaded_store(&MemoryPreferences::new(), |root| {
        let other = root.clone();
        other.ui.set_sidebar_open(false);
        assert!(!root.ui.sidebar_open());
        assert_eq!(root.ui, other.ui);
        assert_eq!(root, other);
    });
}
