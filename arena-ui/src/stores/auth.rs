//! Signed-in organizer session (read by the navbar)

use super::app::{AppState, AppStateStoreExt};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Account roles as issued by the backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Participant,
    Organizer,
    Admin,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub display_name: Option<String>,
    pub role: Role,
}

impl SessionUser {
    /// Name shown in the navbar
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    pub fn can_organize(&self) -> bool {
        matches!(self.role, Role::Organizer | Role::Admin)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

/// Writes the auth slice of the app store
#[derive(Clone, Copy, PartialEq)]
pub struct AuthSlice {
    state: Store<AppState>,
}

impl AuthSlice {
    pub(crate) fn new(state: Store<AppState>) -> Self {
        Self { state }
    }

    pub fn sign_in(&self, user: SessionUser) {
        info!("Signed in as {}", user.username);
        self.state.auth().user().set(Some(user));
    }

    pub fn sign_out(&self) {
        self.state.auth().user().set(None);
    }

    pub fn current_user(&self) -> Option<SessionUser> {
        self.state.auth().user().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::app::RootStore;
    use crate::stores::preferences::NoPreferences;
    use crate::test_support::in_runtime;

    #[test]
    fn test_label_prefers_display_name() {
        let mut user = SessionUser {
            username: "ada".into(),
            display_name: None,
            role: Role::Organizer,
        };
        assert_eq!(user.label(), "ada");
        user.display_name = Some("Ada L.".into());
        assert_eq!(user.label(), "Ada L.");
    }

    #[test]
    fn test_role_from_backend_json() {
        let user: SessionUser = serde_json::from_str(
            r#"{"username":"grace","display_name":null,"role":"organizer"}"#,
        )
        .unwrap();
        assert!(user.can_organize());
    }

    #[test]
    fn test_sign_out_clears_user() {
        in_runtime(|| {
            let auth = RootStore::new(NoPreferences).auth;
            auth.sign_in(SessionUser {
                username: "linus".into(),
                display_name: None,
                role: Role::Participant,
            });
            assert!(auth.current_user().is_some());
            auth.sign_out();
            assert_eq!(auth.current_user(), None);
        });
    }
}
