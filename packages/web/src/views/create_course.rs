//! Course creation form. Instructor/Admin only.

use api::CourseDraft;
use dioxus::prelude::*;
use session::Role;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_api, use_session};

use crate::views::Protected;
use crate::Route;

#[component]
pub fn CreateCourse() -> Element {
    rsx! {
        Protected {
            roles: vec![Role::Admin, Role::Instructor],
            CreateCourseForm {}
        }
    }
}

#[component]
fn CreateCourseForm() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut draft = use_signal(CourseDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            spawn(async move {
                error.set(None);

                if draft().title.trim().is_empty() {
                    error.set(Some("Title is required".to_string()));
                    return;
                }

                loading.set(true);
                let token = session.state().credential.unwrap_or_default();
                match api.create_course(&token, &draft()).await {
                    Ok(created) => {
                        nav.replace(Route::CourseDetail {
                            course_id: created.id,
                        });
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(err.display_message("Failed to create course")));
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "form-page",

            h1 { "Create Course" }

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

                label { class: "form-label", "Description" }
                textarea {
                    class: "input",
                    rows: "4",
                    value: draft().description,
                    oninput: move |evt| {
                        let mut d = draft();
                        d.description = evt.value();
                        draft.set(d);
                    },
                }

                label { class: "form-label", "Category" }
                Input {
                    value: draft().category,
                    oninput: move |evt: FormEvent| {
                        let mut d = draft();
                        d.category = evt.value();
                        draft.set(d);
                    },
                }

                div { class: "form-row",
                    div {
                        label { class: "form-label", "Price" }
                        Input {
                            r#type: "number",
                            value: draft().price.to_string(),
                            oninput: move |evt: FormEvent| {
                                let mut d = draft();
                                d.price = evt.value().parse().unwrap_or(0.0);
                                draft.set(d);
                            },
                        }
                    }
                    div {
                        label { class: "form-label", "Duration (hours)" }
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

                label { class: "form-label", "Level" }
                select {
                    class: "input",
                    value: draft().level,
                    onchange: move |evt| {
                        let mut d = draft();
                        d.level = evt.value();
                        draft.set(d);
                    },
                    option { value: "Beginner", "Beginner" }
                    option { value: "Intermediate", "Intermediate" }
                    option { value: "Advanced", "Advanced" }
                }

                label { class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: draft().is_published,
                        onchange: move |evt| {
                            let mut d = draft();
                            d.is_published = evt.checked();
                            draft.set(d);
                        },
                    }
                    "Publish Course"
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating..." } else { "Create Course" }
                }
            }
        }
    }
}
