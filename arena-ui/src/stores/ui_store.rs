//! Operations on the UI slice of the app store
//!
//! All six operations go through [`UiStore::dispatch`]: the pure transition
//! runs on a copy, the theme is persisted if the action asks for it, and only
//! then is the changed field written back through its lens. The write marks
//! every reader of that field (and every deep reader of the UI slice) dirty
//! before `dispatch` returns.
//!
//! Readers re-run on the Dioxus scheduler after the write has landed, so a
//! transition started from a re-render is a fresh dispatch that sees the
//! completed one.

use super::app::{AppState, AppStateStoreExt};
use super::preferences::{PreferenceStore, THEME_KEY};
use super::ui::{Theme, UiAction, UiEffect, UiState, UiStateStoreExt};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::debug;

/// Handle to the UI slice. Cheap to clone; clones write to the same store.
#[derive(Clone)]
pub struct UiStore {
    state: Store<AppState>,
    preferences: Rc<dyn PreferenceStore>,
}

impl PartialEq for UiStore {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.preferences, &other.preferences)
    }
}

impl std::fmt::Debug for UiStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiStore")
            .field("state", &*self.state.ui().peek())
            .finish()
    }
}

impl UiStore {
    pub(crate) fn new(state: Store<AppState>, preferences: Rc<dyn PreferenceStore>) -> Self {
        Self { state, preferences }
    }

    // -------------------------------------------------------------------------
    // Reads (subscribe the calling component)
    // -------------------------------------------------------------------------

    pub fn snapshot(&self) -> UiState {
        self.state.ui().cloned()
    }

    pub fn sidebar_open(&self) -> bool {
        self.state.ui().sidebar_open().cloned()
    }

    pub fn command_palette_open(&self) -> bool {
        self.state.ui().command_palette_open().cloned()
    }

    pub fn theme(&self) -> Theme {
        self.state.ui().theme().cloned()
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    pub fn toggle_sidebar(&self) {
        self.dispatch(UiAction::ToggleSidebar);
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.dispatch(UiAction::SetSidebarOpen(open));
    }

    pub fn toggle_command_palette(&self) {
        self.dispatch(UiAction::ToggleCommandPalette);
    }

    pub fn set_command_palette_open(&self, open: bool) {
        self.dispatch(UiAction::SetCommandPaletteOpen(open));
    }

    pub fn toggle_theme(&self) {
        self.dispatch(UiAction::ToggleTheme);
    }

    pub fn set_theme(&self, theme: Theme) {
        self.dispatch(UiAction::SetTheme(theme));
    }

    /// Apply an action and write the result back.
    ///
    /// The touched field is always written, even when the value is
    /// unchanged, so its readers are notified once per dispatch.
    pub fn dispatch(&self, action: UiAction) {
        let ui = self.state.ui();
        let mut next = UiState::clone(&ui.peek());
        let effect = next.apply(&action);
        debug!(?action, "Applied UI action");

        if let Some(UiEffect::PersistTheme(value)) = effect {
            self.preferences.set(THEME_KEY, &value);
        }

        match action {
            UiAction::ToggleSidebar | UiAction::SetSidebarOpen(_) => {
                ui.sidebar_open().set(next.sidebar_open);
            }
            UiAction::ToggleCommandPalette | UiAction::SetCommandPaletteOpen(_) => {
                ui.command_palette_open().set(next.command_palette_open);
            }
            UiAction::ToggleTheme | UiAction::SetTheme(_) => {
                ui.theme().set(next.theme);
            }
        }
    }
}
