//! Side navigation panel
//!
//! Pure, props-based. Width, labels and the collapse control all come from
//! the derived [`ShellLayout`].

use crate::components::icons::{
    ChevronsLeftIcon, ChevronsRightIcon, CodeIcon, LayoutDashboardIcon, TrophyIcon, UserIcon,
};
use crate::components::layout_shell::{NavPanelState, ShellIntent, ShellLayout, ToggleAction};
use dioxus::prelude::*;

/// Icon shown next to (or instead of) a navigation label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Contests,
    Problems,
    Profile,
}

/// Navigation entry for the side panel and the command palette
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub icon: NavIcon,
    pub is_active: bool,
}

#[component]
pub fn NavIconView(icon: NavIcon, #[props(default = "icon")] class: &'static str) -> Element {
    match icon {
        NavIcon::Dashboard => rsx! { LayoutDashboardIcon { class } },
        NavIcon::Contests => rsx! { TrophyIcon { class } },
        NavIcon::Problems => rsx! { CodeIcon { class } },
        NavIcon::Profile => rsx! { UserIcon { class } },
    }
}

/// Side navigation view (pure, props-based)
#[component]
pub fn SideNavView(
    layout: ShellLayout,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    on_intent: EventHandler<ShellIntent>,
) -> Element {
    let hidden = layout.panel == NavPanelState::HiddenOverlay;
    let panel_style = layout.panel_style();
    let panel_name = format!("{:?}", layout.panel);
    let (toggle_title, toggle_icon) = match layout.toggle_action {
        ToggleAction::Collapse => (
            "Collapse sidebar",
            rsx! { ChevronsLeftIcon { class: "icon" } },
        ),
        ToggleAction::Expand => (
            "Expand sidebar",
            rsx! { ChevronsRightIcon { class: "icon" } },
        ),
    };

    rsx! {
        aside {
            id: "side-nav",
            class: "side-nav",
            style: "{panel_style}",
            "data-panel": "{panel_name}",
            "aria-hidden": "{hidden}",

            nav { class: "side-nav-links",
                for item in nav_items.iter() {
                    SideNavLink {
                        key: "{item.id}",
                        item: item.clone(),
                        show_label: layout.show_labels,
                        on_click: {
                            let id = item.id.clone();
                            move |_| on_nav_click.call(id.clone())
                        },
                    }
                }
            }

            if layout.show_collapse_toggle {
                button {
                    class: "collapse-toggle",
                    title: toggle_title,
                    onclick: move |_| on_intent.call(ShellIntent::ToggleCollapse),
                    {toggle_icon}
                }
            }
        }
    }
}

#[component]
fn SideNavLink(item: NavItem, show_label: bool, on_click: EventHandler<()>) -> Element {
    let active = if item.is_active { "active" } else { "" };
    let icon_only = if show_label { "" } else { "icon-only" };

    rsx! {
        button {
            class: "side-nav-link {active} {icon_only}",
            title: "{item.label}",
            onclick: move |_| on_click.call(()),
            NavIconView { icon: item.icon }
            if show_label {
                span { "{item.label}" }
            }
        }
    }
}
