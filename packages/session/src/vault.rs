//! Durable key-value storage for the credential and identity snapshot.

use std::future::Future;

/// Storage slot holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage slot holding the JSON-serialized identity snapshot.
pub const USER_KEY: &str = "user";

/// Async interface over the store that outlives page loads.
///
/// Under normal operation the two slots are both present or both absent;
/// the session store treats anything else as signed out and scrubs it.
/// Implementations live in sibling modules ([`crate::MemoryVault`], and
/// [`crate::LocalStorageVault`] on the web target); a failing backend must
/// degrade to "nothing stored", not an error.
pub trait CredentialVault {
    fn read(&self, key: &str) -> impl Future<Output = Option<String>>;
    fn write(&self, key: &str, value: &str) -> impl Future<Output = ()>;
    fn remove(&self, key: &str) -> impl Future<Output = ()>;
}
