use super::dashboard::PageHeader;
use dioxus::prelude::*;

#[component]
pub fn Contests() -> Element {
    rsx! {
        PageHeader { title: "Contests", subtitle: "Create contests, manage problems and participants" }
    }
}
