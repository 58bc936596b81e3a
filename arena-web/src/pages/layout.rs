use crate::Route;
use arena_ui::LayoutShell;
use dioxus::prelude::*;

/// Wraps every organizer page in the responsive shell
#[component]
pub fn OrganizerLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = Route::destinations()
        .iter()
        .map(|route| route.nav_item(&current_route))
        .collect::<Vec<_>>();

    rsx! {
        LayoutShell {
            title: "CodeArena Organizer",
            nav_items,
            on_nav_click: move |id: String| {
                if let Some(route) = Route::from_nav_id(&id) {
                    navigator().push(route);
                }
            },
            Outlet::<Route> {}
        }
    }
}
