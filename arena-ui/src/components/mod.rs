//! Shared UI components

pub mod command_palette;
pub mod icons;
pub mod layout_shell;
pub mod navbar;
pub mod side_nav;

pub use command_palette::{filter_nav_items, CommandPaletteView};
pub use icons::{
    BellIcon, ChevronsLeftIcon, ChevronsRightIcon, CodeIcon, LayoutDashboardIcon, MenuIcon,
    MoonIcon, SearchIcon, SunIcon, TrophyIcon, UserIcon,
};
pub use layout_shell::{
    nav_panel_state, LayoutMetrics, LayoutShell, LayoutShellView, NavPanelState, ShellIntent,
    ShellLayout, ToggleAction, ViewportClass,
};
pub use navbar::NavbarView;
pub use side_nav::{NavIcon, NavIconView, NavItem, SideNavView};
