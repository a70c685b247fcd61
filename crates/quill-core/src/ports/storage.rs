//! File storage port for uploaded cover images.

use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist an uploaded file and return the relative path it is served
    /// under. `original_name` is only consulted for its extension; the
    /// stored name is generated.
    async fn save(&self, original_name: &str, source: &Path) -> Result<String, FileStoreError>;
}

/// File store errors.
#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}
