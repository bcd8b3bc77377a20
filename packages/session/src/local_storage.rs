//! # `localStorage`-backed vault — browser-side persistence
//!
//! [`LocalStorageVault`] is the [`CredentialVault`] used on the **web
//! platform**. It keeps the `token` and `user` slots in
//! `window.localStorage`, which survives page reloads and browser restarts
//! but is scoped to the origin — exactly the durability the session needs.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled or full
//! degrades to "no persisted session", which the store resolves to the
//! signed-out state rather than a crash.

use crate::vault::CredentialVault;

/// Browser `localStorage` CredentialVault for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageVault;

impl LocalStorageVault {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl CredentialVault for LocalStorageVault {
    async fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
