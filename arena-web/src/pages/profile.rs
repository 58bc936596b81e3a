use super::dashboard::PageHeader;
use dioxus::prelude::*;

#[component]
pub fn Profile() -> Element {
    rsx! {
        PageHeader { title: "Profile", subtitle: "Organization details shown to participants" }
    }
}
