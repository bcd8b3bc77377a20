//! # API crate — typed client for the LearnSphere REST backend
//!
//! Every request the frontend makes goes through [`ApiClient`], a thin
//! wrapper over `reqwest` that knows the backend's conventions: JSON bodies,
//! bearer-token authorization on everything past login/registration, success
//! payloads wrapped in an envelope field, and failures explained by a
//! `message` field in the body.
//!
//! ## Endpoints
//!
//! | Area | Calls |
//! |------|-------|
//! | Authentication | [`login`](ApiClient::login), [`register`](ApiClient::register), [`current_identity`](ApiClient::current_identity), [`delete_account`](ApiClient::delete_account) |
//! | Courses & lessons | [`list_courses`](ApiClient::list_courses), [`course`](ApiClient::course), [`create_course`](ApiClient::create_course), [`update_course`](ApiClient::update_course), [`delete_course`](ApiClient::delete_course), [`list_lessons`](ApiClient::list_lessons), [`create_lesson`](ApiClient::create_lesson), [`update_lesson`](ApiClient::update_lesson), [`delete_lesson`](ApiClient::delete_lesson) |
//! | Enrollment | [`enroll`](ApiClient::enroll), [`unenroll`](ApiClient::unenroll), [`list_enrollments`](ApiClient::list_enrollments), [`update_progress`](ApiClient::update_progress) |
//! | Profile | [`profile`](ApiClient::profile), [`create_profile`](ApiClient::create_profile), [`update_profile`](ApiClient::update_profile), [`delete_profile`](ApiClient::delete_profile) |
//!
//! The client also implements [`session::AuthApi`], which is how the session
//! store reaches the auth endpoints without depending on HTTP types.
//!
//! The token is always borrowed from the caller — the session layer stays
//! the single owner of the credential.

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;

mod error;
pub use error::ApiError;

pub mod models;
pub use models::{
    Course, CourseDraft, Enrollment, Lesson, LessonDraft, LessonKind, Profile, ProfileDraft,
};

mod auth;
mod courses;
mod enrollments;
mod profile;

/// Backend address used when none is baked in at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Error payload shape shared by every endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the LearnSphere backend. Cheap to clone.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Client for the base URL baked in via `LEARNSPHERE_API_URL` at build
    /// time, falling back to the local development backend.
    pub fn from_env() -> Self {
        Self::new(option_env!("LEARNSPHERE_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Send a request and decode the success body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else {
            Err(rejected(status.as_u16(), response).await)
        }
    }

    /// Send a request whose success body is irrelevant.
    pub(crate) async fn execute_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(rejected(status.as_u16(), response).await)
        }
    }
}

async fn rejected(status: u16, response: reqwest::Response) -> ApiError {
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    tracing::debug!("request rejected with status {status}");
    ApiError::Rejected { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://example.com/");
        assert_eq!(client.base_url(), "http://example.com");
        assert_eq!(client.url("/api/courses"), "http://example.com/api/courses");
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"Course not found"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Course not found"));
        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.message, None);
    }
}
