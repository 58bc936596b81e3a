//! Top navbar view component
//!
//! Pure, props-based. Fixed across the top of the shell, above the side panel.

use crate::components::icons::{BellIcon, MenuIcon, MoonIcon, SearchIcon, SunIcon};
use crate::components::layout_shell::{ShellIntent, ShellLayout};
use crate::stores::ThemeVisual;
use dioxus::prelude::*;

#[component]
pub fn NavbarView(
    layout: ShellLayout,
    title: String,
    #[props(default)] user_label: Option<String>,
    #[props(default)] unread_count: usize,
    #[props(default)] on_notifications_click: Option<EventHandler<()>>,
    on_intent: EventHandler<ShellIntent>,
) -> Element {
    let navbar_style = layout.navbar_style();
    // The theme button shows the theme it switches to
    let (theme_title, theme_icon) = match layout.theme {
        ThemeVisual::Dark => ("Switch to light theme", rsx! { SunIcon { class: "icon" } }),
        ThemeVisual::Light => ("Switch to dark theme", rsx! { MoonIcon { class: "icon" } }),
    };

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            style: "{navbar_style}",

            div { class: "navbar-group",
                if layout.show_menu_button {
                    NavbarButton {
                        title: "Open navigation",
                        on_click: move |_| on_intent.call(ShellIntent::OpenMenu),
                        MenuIcon { class: "icon" }
                    }
                }
                span { class: "navbar-title", "{title}" }
            }

            div { class: "navbar-group",
                button {
                    class: "navbar-search",
                    onclick: move |_| on_intent.call(ShellIntent::OpenCommandPalette),
                    SearchIcon {}
                    span { "Search" }
                    kbd { "Ctrl K" }
                }
                NavbarButton {
                    title: theme_title,
                    on_click: move |_| on_intent.call(ShellIntent::ToggleTheme),
                    {theme_icon}
                }
                div { class: "badge-anchor",
                    NavbarButton {
                        title: "Notifications",
                        on_click: move |_| {
                            if let Some(handler) = &on_notifications_click {
                                handler.call(());
                            }
                        },
                        BellIcon { class: "icon" }
                    }
                    if unread_count > 0 {
                        span { class: "badge",
                            "{unread_count}"
                        }
                    }
                }
                if let Some(label) = user_label {
                    span { class: "navbar-user", "{label}" }
                }
            }
        }
    }
}

#[component]
fn NavbarButton(title: &'static str, on_click: EventHandler<()>, children: Element) -> Element {
    rsx! {
        button {
            class: "icon-button",
            title,
            onclick: move |_| on_click.call(()),
            {children}
        }
    }
}
