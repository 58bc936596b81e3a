//! Lucide icons (https://lucide.dev) used by the shell
//!
//! Icons stroke with `currentColor`, so they follow the surrounding text color.
//! Default size is `icon-sm` (16px); override with `class`.

use dioxus::prelude::*;

/// Shared 24x24 stroked SVG frame
#[component]
fn LucideSvg(class: &'static str, children: Element) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

/// Hamburger menu
#[component]
pub fn MenuIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M4 5h16" }
            path { d: "M4 12h16" }
            path { d: "M4 19h16" }
        }
    }
}

#[component]
pub fn ChevronsLeftIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "m11 17-5-5 5-5" }
            path { d: "m18 17-5-5 5-5" }
        }
    }
}

#[component]
pub fn ChevronsRightIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "m6 17 5-5-5-5" }
            path { d: "m13 17 5-5-5-5" }
        }
    }
}

#[component]
pub fn SunIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}

#[component]
pub fn MoonIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
pub fn SearchIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

#[component]
pub fn BellIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M10.268 21a2 2 0 0 0 3.464 0" }
            path { d: "M3.262 15.326A1 1 0 0 0 4 17h16a1 1 0 0 0 .74-1.673C19.41 13.956 18 12.499 18 8A6 6 0 0 0 6 8c0 4.499-1.411 5.956-2.738 7.326" }
        }
    }
}

/// Dashboard (four tiles)
#[component]
pub fn LayoutDashboardIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            rect { width: "7", height: "9", x: "3", y: "3", rx: "1" }
            rect { width: "7", height: "5", x: "14", y: "3", rx: "1" }
            rect { width: "7", height: "9", x: "14", y: "12", rx: "1" }
            rect { width: "7", height: "5", x: "3", y: "16", rx: "1" }
        }
    }
}

/// Contests
#[component]
pub fn TrophyIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M6 9H4.5a2.5 2.5 0 0 1 0-5H6" }
            path { d: "M18 9h1.5a2.5 2.5 0 0 0 0-5H18" }
            path { d: "M4 22h16" }
            path { d: "M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22" }
            path { d: "M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22" }
            path { d: "M18 2H6v7a6 6 0 0 0 12 0V2Z" }
        }
    }
}

/// Problems
#[component]
pub fn CodeIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "m16 18 6-6-6-6" }
            path { d: "m8 6-6 6 6 6" }
        }
    }
}

/// Profile
#[component]
pub fn UserIcon(#[props(default = "icon icon-sm")] class: &'static str) -> Element {
    rsx! {
        LucideSvg { class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}
