//! The authentication endpoints the session store consumes, as a trait.

use std::future::Future;

use thiserror::Error;

use crate::models::{Identity, Role};

/// Token and identity returned by a successful login or registration.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthGrant {
    pub token: String,
    pub identity: Identity,
}

/// Failure reported by the authentication backend.
///
/// `message` carries the server's human-readable explanation when the
/// response body included one; transport-level failures have none and
/// callers fall back to a generic text.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", .message.as_deref().unwrap_or("authentication backend unavailable"))]
pub struct AuthApiError {
    pub message: Option<String>,
}

/// Async trait over the auth endpoints used by
/// [`SessionStore`](crate::SessionStore).
///
/// The production implementation wraps the HTTP client; tests substitute a
/// scripted stub. Methods taking `token` send it as the bearer credential.
pub trait AuthApi {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<AuthGrant, AuthApiError>>;

    fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> impl Future<Output = Result<AuthGrant, AuthApiError>>;

    fn fetch_identity(&self, token: &str) -> impl Future<Output = Result<Identity, AuthApiError>>;

    fn delete_account(&self, token: &str) -> impl Future<Output = Result<(), AuthApiError>>;
}
