//! # SessionStore — the session state machine
//!
//! [`SessionStore`] owns the [`SessionState`] and is its only mutator. It is
//! generic over the auth backend ([`AuthApi`]) and the durable store
//! ([`CredentialVault`]), so the same machine drives the browser app and the
//! test suite.
//!
//! ## Operations
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`initialize`](SessionStore::initialize) | One-shot startup restore + revalidation of a persisted session. |
//! | [`login`](SessionStore::login) / [`register`](SessionStore::register) | Exchange credentials for a session; persist on success, surface the backend's message on failure. |
//! | [`logout`](SessionStore::logout) | Unconditional sign-out; clears memory and storage, never fails. |
//! | [`delete_account`](SessionStore::delete_account) | Delete the account behind the session, then sign out. |
//! | [`snapshot`](SessionStore::snapshot) | Read-only copy of the current state for views and the access guard. |
//!
//! ## Invariants
//!
//! Durable storage is written in the same operation as the in-memory update,
//! so a reader never observes the two diverging. A token that cannot be
//! revalidated — rejected or unreachable backend alike — is treated as
//! invalid and the session is cleared everywhere (fail closed). There is no
//! request fencing: overlapping operations resolve last-write-wins.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::api::{AuthApi, AuthApiError, AuthGrant};
use crate::models::{Identity, Role, SessionState};
use crate::vault::{CredentialVault, TOKEN_KEY, USER_KEY};

/// Recoverable failure from a session operation. Session state is left
/// untouched in every case; the message is ready for a form banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Login or registration was rejected.
    #[error("{0}")]
    AuthRejected(String),
    /// An account mutation failed.
    #[error("{0}")]
    OperationFailed(String),
}

struct Inner {
    state: SessionState,
    started: bool,
}

/// Owner of the current identity, credential, and readiness flag.
///
/// Cheap to clone — clones share the same state.
#[derive(Clone)]
pub struct SessionStore<A, V> {
    api: A,
    vault: V,
    inner: Arc<Mutex<Inner>>,
}

impl<A: AuthApi, V: CredentialVault> SessionStore<A, V> {
    /// Create a store with empty, not-yet-ready state. Call
    /// [`initialize`](Self::initialize) once at startup before taking any
    /// access decision.
    pub fn new(api: A, vault: V) -> Self {
        Self {
            api,
            vault,
            inner: Arc::new(Mutex::new(Inner {
                state: SessionState::default(),
                started: false,
            })),
        }
    }

    /// Read-only copy of the current session state.
    pub fn snapshot(&self) -> SessionState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Restore a persisted session, then revalidate it against the backend.
    ///
    /// Runs once; repeat calls return immediately. With nothing persisted
    /// the store becomes ready synchronously and no request is made. With a
    /// stored pair the identity snapshot is applied optimistically and
    /// `fetch_identity` decides: its answer replaces the snapshot, while any
    /// failure clears the session from memory and storage. A half-present
    /// pair or an unparseable snapshot is scrubbed without a round trip.
    pub async fn initialize(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.started {
                return;
            }
            inner.started = true;
        }

        let token = self.vault.read(TOKEN_KEY).await;
        let saved = self.vault.read(USER_KEY).await;

        let (token, snapshot) = match (token, saved) {
            (None, None) => {
                self.mark_ready();
                return;
            }
            (Some(token), Some(saved)) => match serde_json::from_str::<Identity>(&saved) {
                Ok(identity) => (token, identity),
                Err(err) => {
                    tracing::debug!("discarding unreadable identity snapshot: {err}");
                    self.clear().await;
                    self.mark_ready();
                    return;
                }
            },
            _ => {
                // One slot without the other: an invalid state that must
                // self-heal. Scrub it and come up signed out.
                self.clear().await;
                self.mark_ready();
                return;
            }
        };

        {
            let mut inner = self.inner.lock().unwrap();
            inner.state.identity = Some(snapshot);
            inner.state.credential = Some(token.clone());
        }

        match self.api.fetch_identity(&token).await {
            Ok(identity) => {
                self.vault
                    .write(USER_KEY, &serialize_identity(&identity))
                    .await;
                self.inner.lock().unwrap().state.identity = Some(identity);
            }
            Err(err) => {
                tracing::debug!("stored credential failed revalidation: {err}");
                self.clear().await;
            }
        }
        self.mark_ready();
    }

    /// Exchange email and password for a session.
    ///
    /// On success the grant is stored in memory and durable storage; on
    /// failure nothing changes and the error carries the backend's message,
    /// falling back to `"Login failed"`.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, SessionError> {
        match self.api.login(email, password).await {
            Ok(grant) => Ok(self.install(grant).await),
            Err(err) => Err(SessionError::AuthRejected(reject_message(
                err,
                "Login failed",
            ))),
        }
    }

    /// Create an account and sign in with it, same contract as
    /// [`login`](Self::login). `role` is `Student` unless the caller chose
    /// otherwise.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Identity, SessionError> {
        match self.api.register(email, password, role).await {
            Ok(grant) => Ok(self.install(grant).await),
            Err(err) => Err(SessionError::AuthRejected(reject_message(
                err,
                "Registration failed",
            ))),
        }
    }

    /// Sign out. Unconditional, idempotent, never fails.
    pub async fn logout(&self) {
        self.clear().await;
    }

    /// Delete the account behind the current session, then sign out.
    ///
    /// On failure the session is left untouched and the error carries the
    /// backend's message, falling back to `"Failed to delete account"`.
    pub async fn delete_account(&self) -> Result<(), SessionError> {
        let Some(token) = self.snapshot().credential else {
            return Err(SessionError::OperationFailed("Not signed in".to_string()));
        };
        match self.api.delete_account(&token).await {
            Ok(()) => {
                self.logout().await;
                Ok(())
            }
            Err(err) => Err(SessionError::OperationFailed(reject_message(
                err,
                "Failed to delete account",
            ))),
        }
    }

    /// Persist a grant and make it the current session.
    async fn install(&self, grant: AuthGrant) -> Identity {
        self.vault.write(TOKEN_KEY, &grant.token).await;
        self.vault
            .write(USER_KEY, &serialize_identity(&grant.identity))
            .await;
        let mut inner = self.inner.lock().unwrap();
        inner.state.identity = Some(grant.identity.clone());
        inner.state.credential = Some(grant.token);
        grant.identity
    }

    /// Drop credential and identity from memory and durable storage.
    async fn clear(&self) {
        self.vault.remove(TOKEN_KEY).await;
        self.vault.remove(USER_KEY).await;
        let mut inner = self.inner.lock().unwrap();
        inner.state.identity = None;
        inner.state.credential = None;
    }

    fn mark_ready(&self) {
        self.inner.lock().unwrap().state.ready = true;
    }
}

fn serialize_identity(identity: &Identity) -> String {
    serde_json::to_string(identity).unwrap_or_default()
}

fn reject_message(err: AuthApiError, fallback: &str) -> String {
    err.message.unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::memory::MemoryVault;

    fn student(id: &str, email: &str) -> Identity {
        Identity {
            id: id.to_string(),
            email: email.to_string(),
            role: Role::Student,
        }
    }

    fn rejection(message: Option<&str>) -> AuthApiError {
        AuthApiError {
            message: message.map(str::to_string),
        }
    }

    /// Scripted backend: every endpoint returns its canned result; identity
    /// fetches are counted.
    #[derive(Clone)]
    struct StubApi {
        grant: Result<AuthGrant, AuthApiError>,
        me: Result<Identity, AuthApiError>,
        delete: Result<(), AuthApiError>,
        me_calls: Arc<AtomicUsize>,
    }

    impl Default for StubApi {
        fn default() -> Self {
            Self {
                grant: Err(rejection(None)),
                me: Err(rejection(None)),
                delete: Err(rejection(None)),
                me_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl StubApi {
        fn granting(token: &str, identity: Identity) -> Self {
            Self {
                grant: Ok(AuthGrant {
                    token: token.to_string(),
                    identity: identity.clone(),
                }),
                me: Ok(identity),
                ..Self::default()
            }
        }

        fn rejecting(message: Option<&str>) -> Self {
            Self {
                grant: Err(rejection(message)),
                me: Err(rejection(message)),
                delete: Err(rejection(message)),
                ..Self::default()
            }
        }

        fn me_calls(&self) -> usize {
            self.me_calls.load(Ordering::SeqCst)
        }
    }

    impl AuthApi for StubApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<AuthGrant, AuthApiError> {
            self.grant.clone()
        }

        async fn register(
            &self,
            _email: &str,
            _password: &str,
            _role: Role,
        ) -> Result<AuthGrant, AuthApiError> {
            self.grant.clone()
        }

        async fn fetch_identity(&self, _token: &str) -> Result<Identity, AuthApiError> {
            self.me_calls.fetch_add(1, Ordering::SeqCst);
            self.me.clone()
        }

        async fn delete_account(&self, _token: &str) -> Result<(), AuthApiError> {
            self.delete.clone()
        }
    }

    async fn seed(vault: &MemoryVault, token: &str, identity: &Identity) {
        vault.write(TOKEN_KEY, token).await;
        vault
            .write(USER_KEY, &serde_json::to_string(identity).unwrap())
            .await;
    }

    #[tokio::test]
    async fn initialize_with_empty_storage_is_ready_without_network() {
        let api = StubApi::default();
        let store = SessionStore::new(api.clone(), MemoryVault::new());

        store.initialize().await;

        let state = store.snapshot();
        assert!(state.ready);
        assert!(!state.is_authenticated());
        assert_eq!(api.me_calls(), 0);
    }

    #[tokio::test]
    async fn initialize_replaces_stale_snapshot_with_backend_identity() {
        let fresh = Identity {
            id: "1".to_string(),
            email: "new@b.com".to_string(),
            role: Role::Instructor,
        };
        let api = StubApi {
            me: Ok(fresh.clone()),
            ..StubApi::default()
        };
        let vault = MemoryVault::new();
        seed(&vault, "tok", &student("1", "old@b.com")).await;

        let store = SessionStore::new(api, vault.clone());
        store.initialize().await;

        let state = store.snapshot();
        assert!(state.ready);
        assert_eq!(state.identity, Some(fresh.clone()));
        assert_eq!(state.credential.as_deref(), Some("tok"));
        // the persisted snapshot was refreshed too
        let saved: Identity =
            serde_json::from_str(&vault.read(USER_KEY).await.unwrap()).unwrap();
        assert_eq!(saved, fresh);
    }

    #[tokio::test]
    async fn initialize_clears_session_when_revalidation_fails() {
        let api = StubApi::rejecting(Some("Token is invalid or expired"));
        let vault = MemoryVault::new();
        seed(&vault, "tok", &student("1", "a@b.com")).await;

        let store = SessionStore::new(api, vault.clone());
        store.initialize().await;

        let state = store.snapshot();
        assert!(state.ready);
        assert!(!state.is_authenticated());
        assert_eq!(state.credential, None);
        assert_eq!(vault.read(TOKEN_KEY).await, None);
        assert_eq!(vault.read(USER_KEY).await, None);
    }

    #[tokio::test]
    async fn initialize_scrubs_half_present_pair_without_network() {
        let api = StubApi::default();
        let vault = MemoryVault::new();
        vault.write(TOKEN_KEY, "orphan").await;

        let store = SessionStore::new(api.clone(), vault.clone());
        store.initialize().await;

        let state = store.snapshot();
        assert!(state.ready);
        assert!(!state.is_authenticated());
        assert_eq!(api.me_calls(), 0);
        assert_eq!(vault.read(TOKEN_KEY).await, None);
    }

    #[tokio::test]
    async fn initialize_scrubs_unreadable_snapshot_without_network() {
        let api = StubApi::default();
        let vault = MemoryVault::new();
        vault.write(TOKEN_KEY, "tok").await;
        vault.write(USER_KEY, "not json").await;

        let store = SessionStore::new(api.clone(), vault.clone());
        store.initialize().await;

        assert!(store.snapshot().ready);
        assert!(!store.snapshot().is_authenticated());
        assert_eq!(api.me_calls(), 0);
        assert_eq!(vault.read(TOKEN_KEY).await, None);
        assert_eq!(vault.read(USER_KEY).await, None);
    }

    #[tokio::test]
    async fn initialize_runs_once() {
        let api = StubApi {
            me: Ok(student("1", "a@b.com")),
            ..StubApi::default()
        };
        let vault = MemoryVault::new();
        seed(&vault, "tok", &student("1", "a@b.com")).await;

        let store = SessionStore::new(api.clone(), vault);
        store.initialize().await;
        store.initialize().await;

        assert_eq!(api.me_calls(), 1);
    }

    #[tokio::test]
    async fn login_persists_grant_and_updates_projections() {
        let identity = student("1", "a@b.com");
        let api = StubApi::granting("t", identity.clone());
        let vault = MemoryVault::new();
        let store = SessionStore::new(api, vault.clone());
        store.initialize().await;

        let result = store.login("a@b.com", "pw").await;

        assert_eq!(result, Ok(identity.clone()));
        let state = store.snapshot();
        assert!(state.is_authenticated());
        assert!(state.is_student());
        assert_eq!(state.credential.as_deref(), Some("t"));
        assert_eq!(vault.read(TOKEN_KEY).await.as_deref(), Some("t"));
        let saved: Identity =
            serde_json::from_str(&vault.read(USER_KEY).await.unwrap()).unwrap();
        assert_eq!(saved, identity);
    }

    #[tokio::test]
    async fn rejected_login_surfaces_backend_message_and_changes_nothing() {
        let api = StubApi::rejecting(Some("Invalid credentials"));
        let vault = MemoryVault::new();
        let store = SessionStore::new(api, vault.clone());
        store.initialize().await;

        let result = store.login("a@b.com", "wrong").await;

        assert_eq!(
            result,
            Err(SessionError::AuthRejected("Invalid credentials".to_string()))
        );
        assert!(!store.snapshot().is_authenticated());
        assert_eq!(vault.read(TOKEN_KEY).await, None);
    }

    #[tokio::test]
    async fn login_without_server_message_falls_back_to_generic() {
        let store = SessionStore::new(StubApi::rejecting(None), MemoryVault::new());
        store.initialize().await;

        let result = store.login("a@b.com", "pw").await;

        assert_eq!(
            result,
            Err(SessionError::AuthRejected("Login failed".to_string()))
        );
    }

    #[tokio::test]
    async fn register_signs_in_with_chosen_role() {
        let identity = Identity {
            id: "2".to_string(),
            email: "i@b.com".to_string(),
            role: Role::Instructor,
        };
        let store = SessionStore::new(
            StubApi::granting("t2", identity.clone()),
            MemoryVault::new(),
        );
        store.initialize().await;

        let result = store.register("i@b.com", "pw", Role::Instructor).await;

        assert_eq!(result, Ok(identity));
        assert!(store.snapshot().is_instructor());
    }

    #[tokio::test]
    async fn rejected_register_falls_back_to_generic_message() {
        let store = SessionStore::new(StubApi::rejecting(None), MemoryVault::new());
        store.initialize().await;

        let result = store.register("a@b.com", "pw", Role::Student).await;

        assert_eq!(
            result,
            Err(SessionError::AuthRejected("Registration failed".to_string()))
        );
    }

    #[tokio::test]
    async fn logout_clears_memory_and_storage() {
        let identity = student("1", "a@b.com");
        let api = StubApi::granting("t", identity);
        let vault = MemoryVault::new();
        let store = SessionStore::new(api, vault.clone());
        store.initialize().await;
        store.login("a@b.com", "pw").await.unwrap();

        store.logout().await;

        let state = store.snapshot();
        assert!(state.ready);
        assert!(!state.is_authenticated());
        assert_eq!(state.credential, None);
        assert_eq!(vault.read(TOKEN_KEY).await, None);
        assert_eq!(vault.read(USER_KEY).await, None);
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let vault = MemoryVault::new();
        let store = SessionStore::new(StubApi::default(), vault.clone());
        store.initialize().await;

        store.logout().await;
        let once = store.snapshot();
        store.logout().await;

        assert_eq!(store.snapshot(), once);
        assert_eq!(vault.read(TOKEN_KEY).await, None);
    }

    #[tokio::test]
    async fn delete_account_signs_out_on_success() {
        let identity = student("1", "a@b.com");
        let api = StubApi {
            delete: Ok(()),
            ..StubApi::granting("t", identity)
        };
        let vault = MemoryVault::new();
        let store = SessionStore::new(api, vault.clone());
        store.initialize().await;
        store.login("a@b.com", "pw").await.unwrap();

        assert_eq!(store.delete_account().await, Ok(()));
        assert!(!store.snapshot().is_authenticated());
        assert_eq!(vault.read(TOKEN_KEY).await, None);
    }

    #[tokio::test]
    async fn failed_delete_account_keeps_session() {
        let identity = student("1", "a@b.com");
        let api = StubApi {
            delete: Err(rejection(Some("Nope"))),
            ..StubApi::granting("t", identity.clone())
        };
        let vault = MemoryVault::new();
        let store = SessionStore::new(api, vault.clone());
        store.initialize().await;
        store.login("a@b.com", "pw").await.unwrap();

        let result = store.delete_account().await;

        assert_eq!(
            result,
            Err(SessionError::OperationFailed("Nope".to_string()))
        );
        assert_eq!(store.snapshot().identity, Some(identity));
        assert_eq!(vault.read(TOKEN_KEY).await.as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn delete_account_while_signed_out_fails_locally() {
        let store = SessionStore::new(StubApi::default(), MemoryVault::new());
        store.initialize().await;

        let result = store.delete_account().await;

        assert_eq!(
            result,
            Err(SessionError::OperationFailed("Not signed in".to_string()))
        );
    }
}
