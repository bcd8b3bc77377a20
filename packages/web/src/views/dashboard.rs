//! Dashboard view: role-dependent stats and quick actions.

use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::views::Protected;
use crate::Route;

#[derive(Debug, Clone, PartialEq, Default)]
struct DashboardStats {
    courses: usize,
    enrollments: usize,
    /// Average enrollment progress, rounded percent. Students only.
    progress: u32,
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Protected {
            DashboardInner {}
        }
    }
}

#[component]
fn DashboardInner() -> Element {
    let api = use_api();
    let session = use_session();
    let mut stats = use_signal(DashboardStats::default);
    let mut loading = use_signal(|| true);

    let state = session.state();
    let is_student = state.is_student();
    let is_instructor = state.is_instructor();
    let is_admin = state.is_admin();

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let token = session.state().credential.unwrap_or_default();
            let courses = api.list_courses(&token).await;
            let enrollments = api.list_enrollments(&token).await;
            match (courses, enrollments) {
                (Ok(courses), Ok(enrollments)) => {
                    let average = if enrollments.is_empty() {
                        0.0
                    } else {
                        enrollments.iter().map(|e| e.progress).sum::<f64>()
                            / enrollments.len() as f64
                    };
                    stats.set(DashboardStats {
                        courses: courses.len(),
                        enrollments: enrollments.len(),
                        progress: average.round() as u32,
                    });
                }
                (courses, enrollments) => {
                    if let Err(err) = courses {
                        tracing::error!("failed to fetch courses: {err}");
                    }
                    if let Err(err) = enrollments {
                        tracing::error!("failed to fetch enrollments: {err}");
                    }
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    let current = stats();

    rsx! {
        div {
            class: "dashboard",

            h1 { "Dashboard" }

            if let Some(identity) = &state.identity {
                div { class: "dashboard-welcome",
                    p { "Welcome, {identity.email}!" }
                    p { "Role: {identity.role}" }
                }
            }

            div { class: "stat-grid",
                div { class: "stat-card",
                    h3 { "Courses" }
                    p { class: "stat-number", "{current.courses}" }
                }
                if is_student {
                    div { class: "stat-card",
                        h3 { "My Enrollments" }
                        p { class: "stat-number", "{current.enrollments}" }
                    }
                    div { class: "stat-card",
                        h3 { "Average Progress" }
                        p { class: "stat-number", "{current.progress}%" }
                    }
                }
                if is_instructor || is_admin {
                    div { class: "stat-card",
                        h3 { "Total Enrollments" }
                        p { class: "stat-number", "{current.enrollments}" }
                    }
                }
            }

            div { class: "dashboard-actions",
                Link { to: Route::Courses {}, class: "action-button", "Browse Courses" }
                if is_instructor || is_admin {
                    Link { to: Route::CreateCourse {}, class: "action-button", "Create Course" }
                }
            }
        }
    }
}
