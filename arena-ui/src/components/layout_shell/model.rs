//! Layout derivation for the shell
//!
//! Everything the shell draws is computed here from `(UiState, ViewportClass)`.
//! `sidebar_open` is the only stored flag: whether a closed panel becomes an
//! icon rail or disappears behind an overlay is decided at render time from
//! the viewport class.

use crate::stores::{ThemeVisual, UiState, UiStore};

/// Viewport width class, re-evaluated on every render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

/// Fixed geometry and timing of the shell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Viewports at least this wide are `Wide`
    pub wide_min_width_px: f64,
    pub expanded_width_px: u32,
    pub rail_width_px: u32,
    pub navbar_height_px: u32,
    /// Duration of width, margin and opacity transitions
    pub transition_ms: u32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            wide_min_width_px: 1024.0,
            expanded_width_px: 256,
            rail_width_px: 80,
            navbar_height_px: 64,
            transition_ms: 300,
        }
    }
}

impl LayoutMetrics {
    /// An unknown width (no browser window) counts as wide.
    pub fn classify(&self, viewport_width: Option<f64>) -> ViewportClass {
        match viewport_width {
            Some(width) if width < self.wide_min_width_px => ViewportClass::Narrow,
            _ => ViewportClass::Wide,
        }
    }
}

/// Visual state of the side navigation panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPanelState {
    /// Full width with labels and icons
    Expanded,
    /// Icon-only rail, wide viewports only
    CollapsedRail,
    /// Zero width, narrow viewports only
    HiddenOverlay,
}

pub fn nav_panel_state(sidebar_open: bool, viewport: ViewportClass) -> NavPanelState {
    match (sidebar_open, viewport) {
        (true, _) => NavPanelState::Expanded,
        (false, ViewportClass::Wide) => NavPanelState::CollapsedRail,
        (false, ViewportClass::Narrow) => NavPanelState::HiddenOverlay,
    }
}

/// What the collapse control does when pressed (its icon points this way)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Expand,
    Collapse,
}

/// Everything the shell needs to render one frame
#[derive(Clone, Debug, PartialEq)]
pub struct ShellLayout {
    pub viewport: ViewportClass,
    pub panel: NavPanelState,
    pub panel_width_px: u32,
    pub content_offset_px: u32,
    pub show_labels: bool,
    /// The overlay stays mounted on narrow viewports so it can fade out
    pub mount_dismiss_overlay: bool,
    /// Overlay is visible and catches clicks
    pub show_dismiss_overlay: bool,
    pub show_collapse_toggle: bool,
    pub toggle_action: ToggleAction,
    /// Navbar control that opens the panel on narrow viewports
    pub show_menu_button: bool,
    pub show_command_palette: bool,
    pub theme: ThemeVisual,
    pub navbar_height_px: u32,
    pub transition_ms: u32,
}

impl ShellLayout {
    pub fn derive(state: &UiState, viewport: ViewportClass, metrics: &LayoutMetrics) -> Self {
        let panel = nav_panel_state(state.sidebar_open, viewport);
        let wide = viewport == ViewportClass::Wide;

        let panel_width_px = match panel {
            NavPanelState::Expanded => metrics.expanded_width_px,
            NavPanelState::CollapsedRail => metrics.rail_width_px,
            NavPanelState::HiddenOverlay => 0,
        };

        // The panel never reserves space on narrow viewports
        let content_offset_px = match (wide, state.sidebar_open) {
            (false, _) => 0,
            (true, true) => metrics.expanded_width_px,
            (true, false) => metrics.rail_width_px,
        };

        Self {
            viewport,
            panel,
            panel_width_px,
            content_offset_px,
            show_labels: panel == NavPanelState::Expanded,
            mount_dismiss_overlay: !wide,
            show_dismiss_overlay: !wide && panel == NavPanelState::Expanded,
            show_collapse_toggle: wide,
            toggle_action: if state.sidebar_open {
                ToggleAction::Collapse
            } else {
                ToggleAction::Expand
            },
            show_menu_button: !wide,
            show_command_palette: state.command_palette_open,
            theme: state.theme.visual(),
            navbar_height_px: metrics.navbar_height_px,
            transition_ms: metrics.transition_ms,
        }
    }

    pub fn navbar_style(&self) -> String {
        format!(
            "position: fixed; top: 0; left: 0; right: 0; z-index: 50; height: {}px;",
            self.navbar_height_px
        )
    }

    /// Fixed to the left edge under the navbar; only the width animates.
    pub fn panel_style(&self) -> String {
        format!(
            "position: fixed; top: {}px; bottom: 0; left: 0; z-index: 40; width: {}px; \
             overflow: hidden; transition: width {}ms ease-in-out;",
            self.navbar_height_px, self.panel_width_px, self.transition_ms
        )
    }

    pub fn content_style(&self) -> String {
        format!(
            "padding-top: {}px; margin-left: {}px; transition: margin-left {}ms ease-in-out;",
            self.navbar_height_px, self.content_offset_px, self.transition_ms
        )
    }

    /// Full-viewport backdrop below the panel. A hidden overlay lets clicks
    /// through to the page.
    pub fn overlay_style(&self) -> String {
        let (opacity, pointer_events) = if self.show_dismiss_overlay {
            (1, "auto")
        } else {
            (0, "none")
        };
        format!(
            "position: fixed; inset: 0; z-index: 30; background-color: rgba(0, 0, 0, 0.5); \
             opacity: {}; pointer-events: {}; transition: opacity {}ms ease-in-out;",
            opacity, pointer_events, self.transition_ms
        )
    }
}

/// A user interaction with one of the shell's own controls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellIntent {
    /// Collapse/expand control (wide viewports)
    ToggleCollapse,
    /// Navbar menu button (narrow viewports)
    OpenMenu,
    /// Click on the overlay behind the open panel (narrow viewports)
    DismissOverlay,
    ToggleTheme,
    OpenCommandPalette,
    CloseCommandPalette,
    ToggleCommandPalette,
}

impl ShellIntent {
    /// Run the matching store operation. Exactly one per intent.
    pub fn apply(self, store: &UiStore) {
        match self {
            Self::ToggleCollapse => store.toggle_sidebar(),
            Self::OpenMenu => store.set_sidebar_open(true),
            Self::DismissOverlay => store.set_sidebar_open(false),
            Self::ToggleTheme => store.toggle_theme(),
            Self::OpenCommandPalette => store.set_command_palette_open(true),
            Self::CloseCommandPalette => store.set_command_palette_open(false),
            Self::ToggleCommandPalette => store.toggle_command_palette(),
        }
    }
}
