//! Course detail view: lessons, enrollment and progress for students, and
//! manage actions for instructors/admins.

use api::{Enrollment, Lesson};
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::views::{confirm, Protected};
use crate::Route;

#[component]
pub fn CourseDetail(course_id: String) -> Element {
    rsx! {
        Protected {
            CourseDetailInner { course_id }
        }
    }
}

#[component]
fn CourseDetailInner(course_id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let mut course = use_signal(|| Option::<api::Course>::None);
    let mut enrollment = use_signal(|| Option::<Enrollment>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let state = session.state();
    let is_student = state.is_student();
    let can_manage = state.is_instructor() || state.is_admin();

    let enroll_api = api.clone();
    let unenroll_api = api.clone();
    let toggle_api = api.clone();
    let delete_api = api.clone();
    let loader_id = course_id.clone();
    let _loader = use_resource(move || {
        let api = api.clone();
        let course_id = loader_id.clone();
        async move {
            let token = session.state().credential.unwrap_or_default();
            match api.course(&token, &course_id).await {
                Ok(found) => course.set(Some(found)),
                Err(err) => {
                    tracing::error!("failed to fetch course {course_id}: {err}");
                    error.set(Some("Failed to fetch course details".to_string()));
                }
            }
            if session.state().is_student() {
                match api.list_enrollments(&token).await {
                    Ok(list) => {
                        enrollment.set(list.into_iter().find(|e| e.course_id == course_id));
                    }
                    Err(err) => tracing::error!("failed to check enrollment: {err}"),
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

    let Some(current) = course() else {
        let message = error().unwrap_or_else(|| "Course not found".to_string());
        return rsx! {
            div { class: "error-message", "{message}" }
        };
    };

    let enroll = {
        let api = enroll_api.clone();
        let course_id = course_id.clone();
        move |_| {
            let api = api.clone();
            let course_id = course_id.clone();
            spawn(async move {
                let token = session.state().credential.unwrap_or_default();
                match api.enroll(&token, &course_id).await {
                    Ok(created) => enrollment.set(Some(created)),
                    Err(err) => error.set(Some(err.display_message("Failed to enroll"))),
                }
            });
        }
    };

    let unenroll = {
        let api = unenroll_api.clone();
        let course_id = course_id.clone();
        move |_| {
            if !confirm("Are you sure you want to unenroll from this course?") {
                return;
            }
            let api = api.clone();
            let course_id = course_id.clone();
            spawn(async move {
                let token = session.state().credential.unwrap_or_default();
                match api.unenroll(&token, &course_id).await {
                    Ok(()) => enrollment.set(None),
                    Err(err) => error.set(Some(err.display_message("Failed to unenroll"))),
                }
            });
        }
    };

    let progress = enrollment().map(|e| e.progress.round() as u32);

    rsx! {
        div {
            class: "course-detail",

            div { class: "course-header",
                h1 { "{current.title}" }
                p { class: "course-description", "{current.description}" }
                div { class: "course-meta",
                    span { "Level: {current.level}" }
                    span { "Category: {current.category}" }
                    span { "Duration: {current.duration} hours" }
                }
            }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            if is_student {
                div { class: "enrollment-section",
                    if let Some(percent) = progress {
                        div { class: "progress-bar",
                            div {
                                class: "progress-fill",
                                style: "width: {percent}%",
                                "{percent}%"
                            }
                        }
                        button { class: "btn btn-danger", onclick: unenroll, "Unenroll" }
                    } else {
                        button { class: "btn btn-primary", onclick: enroll, "Enroll in Course" }
                    }
                }
            }

            if can_manage {
                div { class: "course-actions",
                    Link {
                        to: Route::CreateLesson { course_id: course_id.clone() },
                        class: "action-button",
                        "Add Lesson"
                    }
                }
            }

            div { class: "lessons-section",
                h2 { "Lessons" }
                if current.lessons.is_empty() {
                    p { "No lessons available." }
                } else {
                    div { class: "lessons-list",
                        for (index, lesson) in current.lessons.iter().enumerate() {
                            LessonRow {
                                key: "{lesson.id}",
                                index,
                                lesson: lesson.clone(),
                                completed: enrollment()
                                    .map(|e| e.is_completed(&lesson.id))
                                    .filter(|_| is_student),
                                can_manage,
                                on_toggle: {
                                    let api = toggle_api.clone();
                                    let course_id = course_id.clone();
                                    let lesson_id = lesson.id.clone();
                                    move |completed: bool| {
                                        let api = api.clone();
                                        let course_id = course_id.clone();
                                        let lesson_id = lesson_id.clone();
                                        spawn(async move {
                                            let token = session.state().credential.unwrap_or_default();
                                            match api
                                                .update_progress(&token, &course_id, &lesson_id, completed)
                                                .await
                                            {
                                                Ok(updated) => enrollment.set(Some(updated)),
                                                Err(err) => {
                                                    error.set(Some(
                                                        err.display_message("Failed to update progress"),
                                                    ));
                                                }
                                            }
                                        });
                                    }
                                },
                                on_delete: {
                                    let api = delete_api.clone();
                                    let refetch_api = delete_api.clone();
                                    let course_id = course_id.clone();
                                    let lesson_id = lesson.id.clone();
                                    move |_| {
                                        if !confirm("Are you sure you want to delete this lesson?") {
                                            return;
                                        }
                                        let api = api.clone();
                                        let refetch_api = refetch_api.clone();
                                        let course_id = course_id.clone();
                                        let lesson_id = lesson_id.clone();
                                        spawn(async move {
                                            let token = session.state().credential.unwrap_or_default();
                                            match api.delete_lesson(&token, &lesson_id).await {
                                                Ok(()) => {
                                                    if let Ok(found) =
                                                        refetch_api.course(&token, &course_id).await
                                                    {
                                                        course.set(Some(found));
                                                    }
                                                }
                                                Err(err) => {
                                                    error.set(Some(
                                                        err.display_message("Failed to delete lesson"),
                                                    ));
                                                }
                                            }
                                        });
                                    }
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One lesson in the course's list. The completion checkbox renders only for
/// enrolled students (`completed` is `Some`).
#[component]
fn LessonRow(
    index: usize,
    lesson: Lesson,
    completed: Option<bool>,
    can_manage: bool,
    on_toggle: EventHandler<bool>,
    on_delete: EventHandler<()>,
) -> Element {
    let number = index + 1;
    let kind = lesson.lesson_type.as_str();
    rsx! {
        div { class: "lesson-item",
            div { class: "lesson-header",
                h3 { "{number}. {lesson.title}" }
                if let Some(done) = completed {
                    label { class: "lesson-checkbox",
                        input {
                            r#type: "checkbox",
                            checked: done,
                            onchange: move |evt| on_toggle.call(evt.checked()),
                        }
                        "Mark as complete"
                    }
                }
            }
            p { class: "lesson-type", "Type: {kind}" }
            div { class: "lesson-actions",
                Link {
                    to: Route::LessonViewer { lesson_id: lesson.id.clone() },
                    class: "lesson-button",
                    "View Lesson"
                }
                if can_manage {
                    button {
                        class: "lesson-button delete",
                        onclick: move |_| on_delete.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
