//! App chrome: the navigation bar wrapped around every routed view.

use dioxus::prelude::*;
use ui::{use_session, Navbar};

use crate::Route;

/// Layout with the top navigation bar and the routed content below it.
#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let state = session.state();

    let handle_logout = move |_| async move {
        session.logout().await;
        nav.replace(Route::Login {});
    };

    rsx! {
        Navbar {
            Link {
                to: Route::Root {},
                class: "navbar-brand",
                span { class: "brand-icon", "🎓" }
                span { class: "brand-text", "LearnSphere" }
            }
            div {
                class: "navbar-menu",
                if state.is_authenticated() {
                    Link { to: Route::Dashboard {}, class: "navbar-link", "Home" }
                    Link { to: Route::Courses {}, class: "navbar-link", "Courses" }
                    Link { to: Route::Profile {}, class: "navbar-link", "Profile" }
                    if let Some(identity) = &state.identity {
                        span { class: "navbar-user",
                            span { class: "user-icon", "👤" }
                            "{identity.email}"
                        }
                    }
                    button { class: "navbar-button", onclick: handle_logout, "Logout" }
                } else {
                    Link { to: Route::Login {}, class: "navbar-link", "Login" }
                    Link { to: Route::Register {}, class: "navbar-link", "Register" }
                }
            }
        }
        div {
            class: "main-content",
            Outlet::<Route> {}
        }
    }
}
