//! Top-level store composition
//!
//! This combines all slices into a single Store for the organizer area.
//! Components access state via lensing: `root.state.ui().sidebar_open()`,
//! and mutate it through the slice handles (`root.ui`, `root.auth`,
//! `root.notifications`).

use super::auth::{AuthSlice, AuthState};
use super::notifications::{NotificationsSlice, NotificationsState};
use super::preferences::PreferenceStore;
use super::ui::UiState;
use super::ui_store::UiStore;
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::debug;

/// Client-side state for the organizer area
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Sidebar, command palette and theme
    pub ui: UiState,
    /// Signed-in organizer
    pub auth: AuthState,
    /// Inbox shown in the navbar
    pub notifications: NotificationsState,
}

/// The app's one store plus the handles that mutate it.
///
/// Built once by the composition root (inside `use_context_provider`, since
/// the store is owned by the scope that creates it) and provided through
/// context.
#[derive(Clone, PartialEq)]
pub struct RootStore {
    pub state: Store<AppState>,
    pub ui: UiStore,
    pub auth: AuthSlice,
    pub notifications: NotificationsSlice,
}

impl std::fmt::Debug for RootStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootStore")
            .field("state", &*self.state.peek())
            .finish()
    }
}

impl RootStore {
    /// Build the store, reading the persisted theme exactly once.
    pub fn new(preferences: impl PreferenceStore + 'static) -> Self {
        let preferences: Rc<dyn PreferenceStore> = Rc::new(preferences);
        let ui = UiState::hydrate(preferences.as_ref());
        debug!("UI state initialized with theme '{}'", ui.theme);

        let state = Store::new(AppState {
            ui,
            ..AppState::default()
        });

        Self {
            state,
            ui: UiStore::new(state, preferences),
            auth: AuthSlice::new(state),
            notifications: NotificationsSlice::new(state),
        }
    }
}
