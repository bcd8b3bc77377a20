//! # Session crate — identity, credentials, and access decisions
//!
//! This crate is the core of the LearnSphere frontend: it owns who is signed
//! in, the bearer token proving it, and the answer to "may this view render?".
//! It has no UI or HTTP code of its own — the backend and the durable store
//! are traits, so the same logic runs against the real REST client and
//! browser storage in the app, and against scripted stubs in tests.
//!
//! ## Pieces
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`Role`], [`Identity`], and the [`SessionState`] tuple with its derived projections. |
//! | [`store`] | [`SessionStore`] — login, registration, logout, account deletion, and the startup revalidation of a persisted token. |
//! | [`guard`] | [`evaluate`] — the pure role-based access decision for protected views. |
//! | [`vault`](CredentialVault) | Async key-value trait over the durable store; [`MemoryVault`] for tests and native, [`LocalStorageVault`] for the browser. |
//! | [`api`](AuthApi) | The authentication endpoints the store consumes, as a trait implemented next to the HTTP client. |
//!
//! ## Lifecycle
//!
//! The app builds one [`SessionStore`] at startup and calls
//! [`initialize`](SessionStore::initialize) exactly once. Until that resolves
//! the state is not `ready` and no access decision may be taken; afterwards
//! every view reads a [`SessionState`] snapshot and feeds it to
//! [`evaluate`]. All mutation goes through the enumerated store operations —
//! consumers never touch fields directly.

pub mod guard;
pub mod models;
pub mod store;

mod api;
pub use api::{AuthApi, AuthApiError, AuthGrant};

mod vault;
pub use vault::{CredentialVault, TOKEN_KEY, USER_KEY};

mod memory;
pub use memory::MemoryVault;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageVault;

pub use guard::{evaluate, Decision};
pub use models::{Identity, Role, SessionState};
pub use store::{SessionError, SessionStore};
