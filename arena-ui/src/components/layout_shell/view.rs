//! Layout shell views
//!
//! `LayoutShellView` is pure and props-based. `LayoutShell` connects it to the
//! root store from context and the live viewport width.

use super::model::{LayoutMetrics, ShellIntent, ShellLayout};
use crate::components::command_palette::CommandPaletteView;
use crate::components::navbar::NavbarView;
use crate::components::side_nav::{NavItem, SideNavView};
use crate::hooks::{use_root_store, use_ui_state, use_viewport_class};
use dioxus::prelude::*;

/// Ctrl+K / Cmd+K
fn is_palette_shortcut(evt: &KeyboardEvent) -> bool {
    let modifiers = evt.modifiers();
    (modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META))
        && matches!(evt.key(), Key::Character(ref c) if c.eq_ignore_ascii_case("k"))
}

/// Shell view (pure, props-based): navbar, side navigation, dismissal
/// overlay, main region and command palette.
#[component]
pub fn LayoutShellView(
    layout: ShellLayout,
    title: String,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    on_intent: EventHandler<ShellIntent>,
    #[props(default)] user_label: Option<String>,
    #[props(default)] unread_count: usize,
    #[props(default)] on_notifications_click: Option<EventHandler<()>>,
    /// Page body
    children: Element,
) -> Element {
    let theme_class = layout.theme.class_name();
    let overlay_style = layout.overlay_style();
    let show_overlay = layout.show_dismiss_overlay;
    let overlay_hidden = !show_overlay;
    let content_style = layout.content_style();

    rsx! {
        div {
            id: "shell",
            class: "{theme_class}",
            tabindex: "-1",
            onkeydown: move |evt| {
                if is_palette_shortcut(&evt) {
                    evt.prevent_default();
                    on_intent.call(ShellIntent::ToggleCommandPalette);
                }
            },

            div { class: "shell-surface",
                NavbarView {
                    layout: layout.clone(),
                    title,
                    user_label,
                    unread_count,
                    on_notifications_click,
                    on_intent,
                }

                if layout.mount_dismiss_overlay {
                    div {
                        id: "nav-dismiss-overlay",
                        style: "{overlay_style}",
                        "aria-hidden": "{overlay_hidden}",
                        onclick: move |_| {
                            if show_overlay {
                                on_intent.call(ShellIntent::DismissOverlay);
                            }
                        },
                    }
                }

                SideNavView {
                    layout: layout.clone(),
                    nav_items: nav_items.clone(),
                    on_nav_click,
                    on_intent,
                }

                main {
                    id: "main-content",
                    class: "shell-main",
                    style: "{content_style}",
                    div { class: "page-body", {children} }
                }

                if layout.show_command_palette {
                    CommandPaletteView {
                        nav_items: nav_items.clone(),
                        theme: layout.theme,
                        on_nav_click,
                        on_intent,
                    }
                }
            }
        }
    }
}

/// Shell wired to the root store in context.
///
/// Re-derives the layout on every render from the current UI state and the
/// current viewport class.
#[component]
pub fn LayoutShell(
    title: String,
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    children: Element,
) -> Element {
    let root = use_root_store();
    let state = use_ui_state();
    let metrics = LayoutMetrics::default();
    let viewport = use_viewport_class(metrics);
    let layout = ShellLayout::derive(&state, viewport, &metrics);

    let user_label = root.auth.current_user().map(|user| user.label().to_string());
    let unread_count = root.notifications.unread_count();

    let ui = root.ui.clone();
    let notifications = root.notifications;

    rsx! {
        LayoutShellView {
            layout,
            title,
            nav_items,
            on_nav_click,
            on_intent: move |intent: ShellIntent| intent.apply(&ui),
            user_label,
            unread_count,
            on_notifications_click: Some(EventHandler::new(move |_| notifications.mark_all_read())),
            {children}
        }
    }
}
