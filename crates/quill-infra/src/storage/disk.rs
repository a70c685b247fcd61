//! On-disk store for uploaded cover images.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use quill_core::ports::{FileStore, FileStoreError};

/// Stores uploads as flat files under a single directory, served statically
/// under `/uploads`. Stored names are generated; only the extension of the
/// client-supplied name is kept.
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    /// Create the store, ensuring the directory exists.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, FileStoreError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        tracing::info!("Upload storage directory: {}", root.display());
        Ok(Self { root })
    }

    fn stored_name(original_name: &str) -> String {
        // The extension comes from the client; accept plain ascii only
        match original_name.rsplit_once('.') {
            Some((_, ext))
                if !ext.is_empty()
                    && ext.len() <= 16
                    && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
            {
                format!("{}.{}", Uuid::new_v4(), ext)
            }
            _ => Uuid::new_v4().to_string(),
        }
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn save(&self, original_name: &str, source: &Path) -> Result<String, FileStoreError> {
        let stored_name = Self::stored_name(original_name);
        let dest = self.root.join(&stored_name);

        fs::copy(source, &dest).await?;
        tracing::debug!(file = %dest.display(), "Stored uploaded file");

        Ok(format!("uploads/{stored_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_name_keeps_extension() {
        let name = DiskFileStore::stored_name("cover.png");
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn test_stored_name_rejects_suspicious_extension() {
        let name = DiskFileStore::stored_name("cover.p/../ng");
        assert!(!name.contains('/'));
        assert!(!name.contains(".."));
    }

    #[tokio::test]
    async fn test_save_copies_file_into_root() {
        let dir = std::env::temp_dir().join(format!("quill-store-{}", Uuid::new_v4()));
        let store = DiskFileStore::new(&dir).await.unwrap();

        let source = dir.join("source.bin");
        fs::write(&source, b"image-bytes").await.unwrap();

        let public_path = store.save("photo.jpg", &source).await.unwrap();

        assert!(public_path.starts_with("uploads/"));
        assert!(public_path.ends_with(".jpg"));

        let stored = dir.join(public_path.strip_prefix("uploads/").unwrap());
        assert_eq!(fs::read(&stored).await.unwrap(), b"image-bytes");

        fs::remove_dir_all(&dir).await.unwrap();
    }
}
