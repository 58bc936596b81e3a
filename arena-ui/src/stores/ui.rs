//! Shared presentation state (sidebar, command palette, theme)
//!
//! `UiState::apply` is the only place the state changes. It stays pure and
//! hands persistence back to the caller as a [`UiEffect`].

use super::preferences::{PreferenceStore, THEME_KEY};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Theme
// =============================================================================

/// Active color scheme.
///
/// Values read back from storage are kept verbatim, so an unknown stored
/// string survives as `Unrecognized` until something sets a real theme.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Unrecognized(String),
}

impl Theme {
    pub fn from_stored(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            "light" => Self::Light,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Unrecognized(value) => value,
        }
    }

    /// Anything that isn't dark becomes dark.
    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light | Self::Unrecognized(_) => Self::Dark,
        }
    }

    /// Style to render with. Unrecognized values fall back to dark here.
    pub fn visual(&self) -> ThemeVisual {
        match self {
            Self::Light => ThemeVisual::Light,
            Self::Dark | Self::Unrecognized(_) => ThemeVisual::Dark,
        }
    }
}

impl From<String> for Theme {
    fn from(value: String) -> Self {
        Self::from_stored(&value)
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        theme.as_str().to_string()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two styles the renderer actually knows how to draw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeVisual {
    #[default]
    Dark,
    Light,
}

impl ThemeVisual {
    /// Class applied to the shell root; `main.css` keys its palette off it
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

// =============================================================================
// State and transitions
// =============================================================================

/// Presentation state shared across the navbar, side navigation and content.
///
/// Only `theme` is persisted. The two flags reset on every load.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct UiState {
    pub sidebar_open: bool,
    pub command_palette_open: bool,
    pub theme: Theme,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: true,
            command_palette_open: false,
            theme: Theme::Dark,
        }
    }
}

/// Every way the UI state can change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    ToggleSidebar,
    SetSidebarOpen(bool),
    ToggleCommandPalette,
    SetCommandPaletteOpen(bool),
    ToggleTheme,
    SetTheme(Theme),
}

/// Side effect requested by a transition, carried out by the store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEffect {
    PersistTheme(String),
}

impl UiState {
    /// Initial state for a fresh load, with the theme seeded from storage.
    ///
    /// A present, non-empty stored theme is taken as-is; otherwise dark.
    pub fn hydrate(preferences: &dyn PreferenceStore) -> Self {
        let theme = preferences
            .get(THEME_KEY)
            .filter(|value| !value.is_empty())
            .map(|value| Theme::from_stored(&value))
            .unwrap_or_default();

        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn apply(&mut self, action: &UiAction) -> Option<UiEffect> {
        match action {
            UiAction::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                None
            }
            UiAction::SetSidebarOpen(open) => {
                self.sidebar_open = *open;
                None
            }
            UiAction::ToggleCommandPalette => {
                self.command_palette_open = !self.command_palette_open;
                None
            }
            UiAction::SetCommandPaletteOpen(open) => {
                self.command_palette_open = *open;
                None
            }
            UiAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                Some(UiEffect::PersistTheme(self.theme.as_str().to_string()))
            }
            UiAction::SetTheme(theme) => {
                self.theme = theme.clone();
                Some(UiEffect::PersistTheme(self.theme.as_str().to_string()))
            }
        }
    }
}
