//! Lesson creation form. Instructor/Admin only.

use api::{LessonDraft, LessonKind};
use dioxus::prelude::*;
use session::Role;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_api, use_session};

use crate::views::Protected;
use crate::Route;

#[component]
pub fn CreateLesson(course_id: String) -> Element {
    rsx! {
        Protected {
            roles: vec![Role::Admin, Role::Instructor],
            CreateLessonForm { course_id }
        }
    }
}

#[component]
fn CreateLessonForm(course_id: String) -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut draft = use_signal(LessonDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = {
        let api = api.clone();
        let course_id_for_submit = course_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            let course_id = course_id_for_submit.clone();
            spawn(async move {
                error.set(None);

                if draft().title.trim().is_empty() {
                    error.set(Some("Title is required".to_string()));
                    return;
                }

                loading.set(true);
                let token = session.state().credential.unwrap_or_default();
                match api.create_lesson(&token, &course_id, &draft()).await {
                    Ok(_) => {
                        nav.replace(Route::CourseDetail { course_id });
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(err.display_message("Failed to create lesson")));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "form-page",

            h1 { "Create Lesson" }

            if let Some(err) = error() {
                div { class: "error-message", "{err}" }
            }

            form {
                onsubmit: handle_submit,
                class: "entity-form",

                label { class: "form-label", "Title *" }
                Input {
                    value: draft().title,
                    oninput: move |evt: FormEvent| {
                        let mut d = draft();
                        d.title = evt.value();
                        draft.set(d);
                    },
                }

                label { class: "form-label", "Lesson Type" }
                select {
                    class: "input",
                    value: draft().lesson_type.as_str(),
                    onchange: move |evt| {
                        let mut d = draft();
                        d.lesson_type = if evt.value() == "video" {
                            LessonKind::Video
                        } else {
                            LessonKind::Text
                        };
                        draft.set(d);
                    },
                    option { value: "text", "Text" }
                    option { value: "video", "Video" }
                }

                if draft().lesson_type == LessonKind::Video {
                    label { class: "form-label", "Video URL" }
                    Input {
                        r#type: "url",
                        placeholder: "https://www.youtube.com/embed/...",
                        value: draft().video_url,
                        oninput: move |evt: FormEvent| {
                            let mut d = draft();
                            d.video_url = evt.value();
                            draft.set(d);
                        },
                    }
                }

                label { class: "form-label", "Content" }
                textarea {
                    class: "input",
                    rows: "10",
                    value: draft().content,
                    oninput: move |evt| {
                        let mut d = draft();
                        d.content = evt.value();
                        draft.set(d);
                    },
                }

                div { class: "form-row",
                    div {
                        label { class: "form-label", "Order" }
                        Input {
                            r#type: "number",
                            value: draft().order.to_string(),
                            oninput: move |evt: FormEvent| {
                                let mut d = draft();
                                d.order = evt.value().parse().unwrap_or(0);
                                draft.set(d);
                            },
                        }
                    }
                    div {
                        label { class: "form-label", "Duration (minutes)" }
                        Input {
                            r#type: "number",
                            value: draft().duration.to_string(),
                            oninput: move |evt: FormEvent| {
                                let mut d = draft();
                                d.duration = evt.value().parse().unwrap_or(0);
                                draft.set(d);
                            },
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating..." } else { "Create Lesson" }
                }
            }
        }
    }
}
