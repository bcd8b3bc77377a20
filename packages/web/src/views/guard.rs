//! Route-level access control.

use dioxus::prelude::*;
use session::{evaluate, Decision, Role};
use ui::use_session;

use crate::Route;

/// Gate around a protected view.
///
/// Shows a neutral loading state while the session is still revalidating,
/// then either renders the children, bounces unauthenticated viewers to the
/// login page, or shows a 403 notice when the role does not match. Every
/// protected view goes through this single component — no view checks roles
/// on its own.
#[component]
pub fn Protected(#[props(default = Vec::new())] roles: Vec<Role>, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let state = session.state();

    if !state.ready {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    match evaluate(&state, &roles) {
        Decision::Allow => rsx! {
            {children}
        },
        Decision::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Decision::Forbidden => rsx! {
            div { class: "forbidden",
                h2 { "Access denied" }
                p { "Your account does not have permission to view this page." }
            }
        },
    }
}
