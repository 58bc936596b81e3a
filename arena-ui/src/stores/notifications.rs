//! Notification inbox slice (unread badge in the navbar)

use super::app::{AppState, AppStateStoreExt};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Unread, stamped now
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            created_at: Utc::now(),
            read: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

/// Writes the notifications slice of the app store
#[derive(Clone, Copy, PartialEq)]
pub struct NotificationsSlice {
    state: Store<AppState>,
}

impl NotificationsSlice {
    pub(crate) fn new(state: Store<AppState>) -> Self {
        Self { state }
    }

    /// Newest first
    pub fn push(&self, notification: Notification) {
        self.state.notifications().items().insert(0, notification);
    }

    pub fn mark_all_read(&self) {
        for item in self.state.notifications().items().write().iter_mut() {
            item.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.state
            .notifications()
            .items()
            .read()
            .iter()
            .filter(|n| !n.read)
            .count()
    }

    pub fn items(&self) -> Vec<Notification> {
        self.state.notifications().items().cloned()
    }
}
