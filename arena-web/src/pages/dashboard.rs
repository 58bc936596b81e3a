use arena_ui::use_ui_state;
use dioxus::prelude::*;

const STATS: [(&str, &str); 4] = [
    ("Contests", "Hosted by your organization"),
    ("Problems", "Authored problem set"),
    ("Participants", "Across all contests"),
    ("Submissions", "Judged this month"),
];

#[component]
pub fn Dashboard() -> Element {
    // More room for cards while the side panel is collapsed
    let sidebar_open = use_ui_state().sidebar_open;
    let columns = if sidebar_open { "stat-grid" } else { "stat-grid wide" };

    rsx! {
        PageHeader { title: "Dashboard", subtitle: "Overview of your organization" }
        div { class: "{columns}",
            for (label, hint) in STATS {
                div {
                    key: "{label}",
                    class: "stat-card",
                    p { class: "stat-label", "{label}" }
                    p { class: "muted", "{hint}" }
                }
            }
        }
    }
}

#[component]
pub(crate) fn PageHeader(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        div { class: "page-header",
            h1 { "{title}" }
            p { class: "muted", "{subtitle}" }
        }
    }
}
