//! Command palette overlay
//!
//! Visibility is owned by the UI store; the filter text is local to the open palette.

use crate::components::icons::{MoonIcon, SearchIcon, SunIcon};
use crate::components::layout_shell::ShellIntent;
use crate::components::side_nav::{NavIconView, NavItem};
use crate::stores::ThemeVisual;
use dioxus::prelude::*;

/// Case-insensitive label match; an empty query matches everything.
pub fn filter_nav_items(items: &[NavItem], query: &str) -> Vec<NavItem> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| query.is_empty() || item.label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[component]
pub fn CommandPaletteView(
    nav_items: Vec<NavItem>,
    theme: ThemeVisual,
    on_nav_click: EventHandler<String>,
    on_intent: EventHandler<ShellIntent>,
) -> Element {
    let mut query = use_signal(String::new);
    let matches = filter_nav_items(&nav_items, &query.read());
    let theme_label = match theme {
        ThemeVisual::Dark => "Switch to light theme",
        ThemeVisual::Light => "Switch to dark theme",
    };

    rsx! {
        div {
            class: "palette-backdrop",
            onclick: move |_| on_intent.call(ShellIntent::CloseCommandPalette),

            div {
                class: "palette",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "palette-search",
                    SearchIcon {}
                    input {
                        r#type: "text",
                        placeholder: "Jump to...",
                        autofocus: true,
                        autocomplete: "off",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Escape {
                                on_intent.call(ShellIntent::CloseCommandPalette);
                            }
                        },
                    }
                }

                ul { class: "palette-results",
                    for item in matches.iter() {
                        li { key: "{item.id}",
                            button {
                                class: "palette-entry",
                                onclick: {
                                    let id = item.id.clone();
                                    move |_| {
                                        on_intent.call(ShellIntent::CloseCommandPalette);
                                        on_nav_click.call(id.clone());
                                    }
                                },
                                NavIconView { icon: item.icon, class: "icon icon-sm" }
                                span { "{item.label}" }
                            }
                        }
                    }
                    li {
                        button {
                            class: "palette-entry",
                            onclick: move |_| {
                                on_intent.call(ShellIntent::ToggleTheme);
                                on_intent.call(ShellIntent::CloseCommandPalette);
                            },
                            if theme == ThemeVisual::Dark {
                                SunIcon {}
                            } else {
                                MoonIcon {}
                            }
                            span { "{theme_label}" }
                        }
                    }
                }
            }
        }
    }
}
