//! In-memory revocation set for session token ids.
//!
//! Note: revocations are lost on process restart; tokens still expire on
//! their own `exp` claim.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::ports::{RevocationError, RevocationStore};

struct Entry {
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.map(|exp| Instant::now() > exp).unwrap_or(false)
    }
}

/// In-memory revocation set using a HashMap with async RwLock.
///
/// An entry only needs to outlive the token it blocks, so each revocation
/// carries the token's remaining lifetime as its TTL.
pub struct InMemoryRevocationStore {
    revoked: RwLock<HashMap<String, Entry>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self {
            revoked: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn revoke(&self, token_id: &str, ttl: Option<Duration>) -> Result<(), RevocationError> {
        let mut revoked = self.revoked.write().await;

        // Drop entries for tokens that have expired on their own
        revoked.retain(|_, entry| !entry.is_expired());

        revoked.insert(
            token_id.to_string(),
            Entry {
                expires_at: ttl.map(|d| Instant::now() + d),
            },
        );

        Ok(())
    }

    async fn is_revoked(&self, token_id: &str) -> bool {
        let revoked = self.revoked.read().await;
        match revoked.get(token_id) {
            Some(entry) => !entry.is_expired(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_revoke_and_check() {
        let store = InMemoryRevocationStore::new();
        store.revoke("jti-1", None).await.unwrap();

        assert!(store.is_revoked("jti-1").await);
        assert!(!store.is_revoked("jti-2").await);
    }

    #[tokio::test]
    async fn test_entry_lapses_with_token_lifetime() {
        let store = InMemoryRevocationStore::new();
        store
            .revoke("jti-1", Some(Duration::from_millis(10)))
            .await
            .unwrap();

        assert!(store.is_revoked("jti-1").await);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(!store.is_revoked("jti-1").await);
    }
}
