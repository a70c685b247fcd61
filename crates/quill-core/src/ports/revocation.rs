//! Session revocation port.
//!
//! Tokens are stateless, so logout works by remembering revoked token ids
//! (`jti`) until the token would have expired anyway.

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Mark a token id as revoked. `ttl` bounds how long the entry must be
    /// kept - the token's remaining lifetime.
    async fn revoke(&self, token_id: &str, ttl: Option<Duration>) -> Result<(), RevocationError>;

    /// Whether a token id has been revoked.
    async fn is_revoked(&self, token_id: &str) -> bool;
}

/// Revocation store errors.
#[derive(Debug, thiserror::Error)]
pub enum RevocationError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
