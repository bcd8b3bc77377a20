//! Course catalog view: the card grid with role-gated manage actions.

use api::Course;
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::views::{confirm, Protected};
use crate::Route;

#[component]
pub fn Courses() -> Element {
    rsx! {
        Protected {
            CoursesInner {}
        }
    }
}

#[component]
fn CoursesInner() -> Element {
    let api = use_api();
    let session = use_session();
    let mut courses = use_signal(Vec::<Course>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let state = session.state();
    let can_manage = state.is_instructor() || state.is_admin();

    let delete_api = api.clone();
    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let token = session.state().credential.unwrap_or_default();
            match api.list_courses(&token).await {
                Ok(list) => courses.set(list),
                Err(err) => {
                    tracing::error!("failed to fetch courses: {err}");
                    error.set(Some("Failed to fetch courses".to_string()));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading courses..." }
        };
    }

    rsx! {
        div {
            class: "course-list",

            div { class: "course-list-header",
                h1 { "Courses" }
                if can_manage {
                    Link { to: Route::CreateCourse {}, class: "action-button", "Create Course" }
                }
            }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            if courses().is_empty() {
                div { class: "empty-courses",
                    svg {
                        width: "150",
                        height: "150",
                        view_box: "0 0 200 200",
                        fill: "none",
                        circle { cx: "100", cy: "100", r: "80", fill: "#F5F3FF" }
                        path { d: "M100 40L60 60V140L100 160L140 140V60L100 40Z", fill: "#9B7EDE", opacity: "0.3" }
                        circle { cx: "100", cy: "100", r: "20", fill: "#9B7EDE" }
                    }
                    p { "No courses available." }
                }
            } else {
                div { class: "courses-grid",
                    for course in courses() {
                        div { class: "course-card", key: "{course.id}",
                            div { class: "course-content",
                                h3 { "{course.title}" }
                                p { class: "course-description", "{course.description}" }
                                div { class: "course-meta",
                                    span { "Level: {course.level}" }
                                    span { "Lessons: {course.lesson_count}" }
                                }
                                div { class: "course-actions",
                                    Link {
                                        to: Route::CourseDetail { course_id: course.id.clone() },
                                        class: "course-button",
                                        "View Details"
                                    }
                                    if can_manage {
                                        button {
                                            class: "course-button delete",
                                            onclick: {
                                                let api = delete_api.clone();
                                                let course_id = course.id.clone();
                                                move |_| {
                                                    if !confirm("Are you sure you want to delete this course?") {
                                                        return;
                                                    }
                                                    let api = api.clone();
                                                    let course_id = course_id.clone();
                                                    spawn(async move {
                                                        let token = session.state().credential.unwrap_or_default();
                                                        match api.delete_course(&token, &course_id).await {
                                                            Ok(()) => {
                                                                let mut list = courses();
                                                                list.retain(|c| c.id != course_id);
                                                                courses.set(list);
                                                            }
                                                            Err(err) => {
                                                                error.set(Some(err.display_message("Failed to delete course")));
                                                            }
                                                        }
                                                    });
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
