//! Lesson viewer: text content or an embedded video, with the completion
//! toggle for enrolled students.

use api::{Course, Enrollment, Lesson, LessonKind};
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::views::Protected;
use crate::Route;

#[component]
pub fn LessonViewer(lesson_id: String) -> Element {
    rsx! {
        Protected {
            LessonViewerInner { lesson_id }
        }
    }
}

#[component]
fn LessonViewerInner(lesson_id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let mut lesson = use_signal(|| Option::<Lesson>::None);
    let mut course = use_signal(|| Option::<Course>::None);
    let mut enrollment = use_signal(|| Option::<Enrollment>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let is_student = session.state().is_student();

    let toggle_api = api.clone();
    let loader_id = lesson_id.clone();
    // The backend has no lesson-by-id endpoint, so scan course details until
    // the lesson turns up.
    let _loader = use_resource(move || {
        let api = api.clone();
        let lesson_id = loader_id.clone();
        async move {
            let token = session.state().credential.unwrap_or_default();
            match api.list_courses(&token).await {
                Ok(catalog) => {
                    let mut found = None;
                    for summary in catalog {
                        let Ok(detail) = api.course(&token, &summary.id).await else {
                            continue;
                        };
                        if let Some(hit) = detail.lessons.iter().find(|l| l.id == lesson_id) {
                            found = Some((hit.clone(), detail));
                            break;
                        }
                    }
                    match found {
                        Some((hit, detail)) => {
                            if session.state().is_student() {
                                if let Ok(list) = api.list_enrollments(&token).await {
                                    enrollment.set(
                                        list.into_iter().find(|e| e.course_id == detail.id),
                                    );
                                }
                            }
                            lesson.set(Some(hit));
                            course.set(Some(detail));
                        }
                        None => error.set(Some("Lesson not found".to_string())),
                    }
                }
                Err(err) => {
                    tracing::error!("failed to fetch lesson {lesson_id}: {err}");
                    error.set(Some("Failed to fetch lesson".to_string()));
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

    let Some(current) = lesson() else {
        let message = error().unwrap_or_else(|| "Lesson not found".to_string());
        return rsx! {
            div { class: "error-message", "{message}" }
        };
    };

    let completed = enrollment().map(|e| e.is_completed(&current.id));
    let kind = current.lesson_type.as_str();

    let toggle = {
        let api = toggle_api.clone();
        let lesson_id = lesson_id.clone();
        move |_| {
            let api = api.clone();
            let lesson_id = lesson_id.clone();
            let Some(course_id) = course().map(|c| c.id) else {
                return;
            };
            let was_completed = enrollment()
                .map(|e| e.is_completed(&lesson_id))
                .unwrap_or(false);
            spawn(async move {
                let token = session.state().credential.unwrap_or_default();
                match api
                    .update_progress(&token, &course_id, &lesson_id, !was_completed)
                    .await
                {
                    Ok(updated) => enrollment.set(Some(updated)),
                    Err(err) => {
                        error.set(Some(err.display_message("Failed to update progress")));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "lesson-viewer",

            if let Some(parent) = course() {
                Link {
                    to: Route::CourseDetail { course_id: parent.id.clone() },
                    class: "back-link",
                    "← Back to Course"
                }
            }

            div { class: "lesson-content",
                h1 { "{current.title}" }
                div { class: "lesson-meta",
                    span { "Type: {kind}" }
                    if current.duration > 0 {
                        span { "Duration: {current.duration} min" }
                    }
                }

                if let Some(err) = error() {
                    div { class: "error-message", "{err}" }
                }

                if is_student && completed.is_some() {
                    div { class: "lesson-progress",
                        label { class: "lesson-checkbox",
                            input {
                                r#type: "checkbox",
                                checked: completed.unwrap_or(false),
                                onchange: toggle,
                            }
                            "Mark as complete"
                        }
                    }
                }

                if current.lesson_type == LessonKind::Video && !current.video_url.is_empty() {
                    div { class: "video-container",
                        iframe {
                            src: "{current.video_url}",
                            title: "{current.title}",
                            allowfullscreen: true,
                            class: "lesson-video",
                        }
                    }
                }

                div { class: "lesson-text",
                    h2 { "Content" }
                    if current.content.is_empty() {
                        p { "No content available." }
                    } else {
                        p { "{current.content}" }
                    }
                }
            }
        }
    }
}
