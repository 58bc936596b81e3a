//! Responsive layout shell: navbar, collapsible side navigation, main content

pub mod model;
pub mod view;

pub use model::{
    nav_panel_state, LayoutMetrics, NavPanelState, ShellIntent, ShellLayout, ToggleAction,
    ViewportClass,
};
pub use view::{LayoutShell, LayoutShellView};
