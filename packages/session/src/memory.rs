use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::vault::CredentialVault;

/// In-memory CredentialVault for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryVault {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialVault for MemoryVault {
    async fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn write(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vault::{TOKEN_KEY, USER_KEY};

    #[tokio::test]
    async fn read_write_remove() {
        let vault = MemoryVault::new();
        assert_eq!(vault.read(TOKEN_KEY).await, None);

        vault.write(TOKEN_KEY, "tok").await;
        vault.write(USER_KEY, "{}").await;
        assert_eq!(vault.read(TOKEN_KEY).await.as_deref(), Some("tok"));

        vault.remove(TOKEN_KEY).await;
        assert_eq!(vault.read(TOKEN_KEY).await, None);
        assert_eq!(vault.read(USER_KEY).await.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let vault = MemoryVault::new();
        let other = vault.clone();
        vault.write(TOKEN_KEY, "tok").await;
        assert_eq!(other.read(TOKEN_KEY).await.as_deref(), Some("tok"));
    }
}
