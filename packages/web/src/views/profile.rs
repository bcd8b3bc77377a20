//! Profile view: the extended profile form plus the account-deletion
//! section.

use api::ProfileDraft;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input};
use ui::{use_api, use_session};

use crate::views::{confirm, Protected};
use crate::Route;

#[component]
pub fn Profile() -> Element {
    rsx! {
        Protected {
            ProfileInner {}
        }
    }
}

#[component]
fn ProfileInner() -> Element {
    let api = use_api();
    let session = use_session();
    let nav = use_navigator();
    let mut draft = use_signal(ProfileDraft::default);
    let mut profile_id = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| Option::<String>::None);
    let mut failed = use_signal(|| false);

    let state = session.state();

    let save_api = api.clone();
    let delete_api = api.clone();
    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            let token = session.state().credential.unwrap_or_default();
            match api.profile(&token).await {
                Ok(Some(existing)) => {
                    draft.set(ProfileDraft::from_profile(&existing));
                    profile_id.set(Some(existing.id));
                }
                Ok(None) => {}
                Err(err) => tracing::error!("failed to fetch profile: {err}"),
            }
            loading.set(false);
        }
    });

    let handle_save = {
        let api = save_api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            spawn(async move {
                saving.set(true);
                message.set(None);
                failed.set(false);

                let token = session.state().credential.unwrap_or_default();
                let result = if profile_id().is_some() {
                    api.update_profile(&token, &draft()).await
                } else {
                    api.create_profile(&token, &draft()).await
                };
                match result {
                    Ok(saved) => {
                        let created = profile_id().is_none();
                        profile_id.set(Some(saved.id));
                        message.set(Some(if created {
                            "Profile created successfully!".to_string()
                        } else {
                            "Profile updated successfully!".to_string()
                        }));
                    }
                    Err(err) => {
                        failed.set(true);
                        message.set(Some(err.display_message("Error saving profile")));
                    }
                }
                saving.set(false);
            });
        }
    };

    let handle_delete_profile = {
        let api = delete_api.clone();
        move |_: MouseEvent| {
            if !confirm("Are you sure you want to delete your profile?") {
                return;
            }
            let api = api.clone();
            spawn(async move {
                message.set(None);
                failed.set(false);
                let token = session.state().credential.unwrap_or_default();
                match api.delete_profile(&token).await {
                    Ok(()) => {
                        draft.set(ProfileDraft::default());
                        profile_id.set(None);
                        message.set(Some("Profile deleted successfully!".to_string()));
                    }
                    Err(err) => {
                        failed.set(true);
                        message.set(Some(err.display_message("Error deleting profile")));
                    }
                }
            });
        }
    };

    let handle_delete_account = move |_: MouseEvent| {
        if !confirm("Are you sure you want to delete your account? This action cannot be undone.")
        {
            return;
        }
        spawn(async move {
            match session.delete_account().await {
                Ok(()) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    failed.set(true);
                    message.set(Some(err.to_string()));
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "page-loading", "Loading..." }
        };
    }

    rsx! {
        div {
            class: "profile",

            h1 { "Profile Management" }

            if let Some(identity) = &state.identity {
                div { class: "profile-info",
                    p {
                        strong { "Email: " }
                        "{identity.email}"
                    }
                    p {
                        strong { "Role: " }
                        "{identity.role}"
                    }
                }
            }

            if let Some(text) = message() {
                div {
                    class: if failed() { "error-message" } else { "success-message" },
                    "{text}"
                }
            }

            form {
                onsubmit: handle_save,
                class: "entity-form",

                label { class: "form-label", "First Name" }
                Input {
                    value: draft().first_name,
                    oninput: move |evt: FormEvent| {
                        let mut d = draft();
                        d.first_name = evt.value();
                        draft.set(d);
                    },
                }

                label { class: "form-label", "Last Name" }
                Input {
                    value: draft().last_name,
                    oninput: move |evt: FormEvent| {
                        let mut d = draft();
                        d.last_name = evt.value();
                        draft.set(d);
                    },
                }

                label { class: "form-label", "Bio" }
                textarea {
                    class: "input",
                    rows: "4",
                    value: draft().bio,
                    oninput: move |evt| {
                        let mut d = draft();
                        d.bio = evt.value();
                        draft.set(d);
                    },
                }

                label { class: "form-label", "Phone" }
                Input {
                    r#type: "tel",
                    value: draft().phone,
                    oninput: move |evt: FormEvent| {
                        let mut d = draft();
                        d.phone = evt.value();
                        draft.set(d);
                    },
                }

                label { class: "form-label", "Address" }
                Input {
                    value: draft().address,
                    oninput: move |evt: FormEvent| {
                        let mut d = draft();
                        d.address = evt.value();
                        draft.set(d);
                    },
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: saving(),
                    if saving() {
                        "Saving..."
                    } else if profile_id().is_some() {
                        "Update Profile"
                    } else {
                        "Create Profile"
                    }
                }
            }

            div { class: "profile-actions",
                if profile_id().is_some() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: handle_delete_profile,
                        "Delete Profile"
                    }
                }
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: handle_delete_account,
                    "Delete Account"
                }
            }
        }
    }
}
