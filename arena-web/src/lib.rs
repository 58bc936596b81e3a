//! Organizer web app
//!
//! Composition root: builds the one `RootStore` for this page load, seeds the
//! local organizer session and provides the store through context to the
//! shell and pages.

pub mod pages;

use arena_ui::{
    LocalStoragePreferences, NavIcon, NavItem, Notification, Role, RootStore, SessionUser,
};
use dioxus::prelude::*;
use pages::{Contests, Dashboard, OrganizerLayout, Problems, Profile};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(OrganizerLayout)]
    #[route("/")]
    Dashboard {},
    #[route("/contests")]
    Contests {},
    #[route("/problems")]
    Problems {},
    #[route("/profile")]
    Profile {},
}

impl Route {
    /// Side navigation destinations, in display order
    pub fn destinations() -> [Route; 4] {
        [
            Route::Dashboard {},
            Route::Contests {},
            Route::Problems {},
            Route::Profile {},
        ]
    }

    pub fn nav_id(&self) -> &'static str {
        match self {
            Route::Dashboard {} => "dashboard",
            Route::Contests {} => "contests",
            Route::Problems {} => "problems",
            Route::Profile {} => "profile",
        }
    }

    pub fn from_nav_id(id: &str) -> Option<Route> {
        Self::destinations()
            .into_iter()
            .find(|route| route.nav_id() == id)
    }

    pub fn nav_item(&self, current: &Route) -> NavItem {
        let (label, icon) = match self {
            Route::Dashboard {} => ("Dashboard", NavIcon::Dashboard),
            Route::Contests {} => ("Contests", NavIcon::Contests),
            Route::Problems {} => ("Problems", NavIcon::Problems),
            Route::Profile {} => ("Profile", NavIcon::Profile),
        };
        NavItem {
            id: self.nav_id().to_string(),
            label: label.to_string(),
            icon,
            is_active: self == current,
        }
    }
}

/// Organizer the navbar shows until sign-in is wired to a backend
pub fn local_organizer() -> SessionUser {
    SessionUser {
        username: "organizer".to_string(),
        display_name: Some("Local Organizer".to_string()),
        role: Role::Organizer,
    }
}

/// Sign in the local organizer and leave a welcome note in the inbox.
pub fn seed_local_session(root: &RootStore) {
    root.auth.sign_in(local_organizer());
    root.notifications.push(Notification::new(
        "welcome",
        "Welcome to CodeArena. Create a contest to get started.",
    ));
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let root = RootStore::new(LocalStoragePreferences);
        seed_local_session(&root);
        root
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
