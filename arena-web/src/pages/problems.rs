use super::dashboard::PageHeader;
use dioxus::prelude::*;

#[component]
pub fn Problems() -> Element {
    rsx! {
        PageHeader { title: "Problems", subtitle: "Author problems and their test cases" }
    }
}
