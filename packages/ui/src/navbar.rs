use dioxus::prelude::*;

/// Top navigation bar shell. The app crate owns the routes, so it drops its
/// links and session controls in as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-container",
                {children}
            }
        }
    }
}
