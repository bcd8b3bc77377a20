//! This crate contains all shared UI for the workspace.

pub mod components;

mod navbar;
pub use navbar::Navbar;

mod session_ctx;
pub use session_ctx::{use_api, use_session, AppSessionStore, SessionHandle, SessionProvider};
