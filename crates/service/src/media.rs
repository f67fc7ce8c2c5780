//! Image storage behind the upload endpoints.
//!
//! `LocalMediaStore` writes files under `<root>/<folder>/<uuid>.<ext>`; the
//! server exposes `<root>` at `/uploads`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::ServiceError;

pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "svg", "ico"];

/// One uploaded file part.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredMedia {
    pub url: String,
    pub secure_url: String,
    /// `<folder>/<file>`; pass back to [`MediaStore::remove`].
    pub public_id: String,
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn put(&self, folder: &str, file_name: &str, bytes: &[u8]) -> Result<StoredMedia, ServiceError>;
    async fn remove(&self, public_id: &str) -> Result<(), ServiceError>;
    /// Map a URL produced by `put` back to its public id.
    fn public_id_of(&self, url: &str) -> Option<String>;
}

/// Lowercased image extension of `file_name`, or a validation error.
pub fn image_extension(file_name: &str) -> Result<String, ServiceError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(ServiceError::validation(format!("unsupported file type '{file_name}'")))
    }
}

fn check_folder(folder: &str) -> Result<(), ServiceError> {
    if folder.is_empty() || !folder.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ServiceError::validation(format!("invalid media folder '{folder}'")));
    }
    Ok(())
}

pub struct LocalMediaStore {
    root: PathBuf,
    base_url: String,
}

impl LocalMediaStore {
    /// `base_url` is the public origin (may be empty for host-relative URLs).
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        Self { root: root.into(), base_url: base_url.trim_end_matches('/').to_string() }
    }

    fn url_for(&self, public_id: &str) -> String { format!("{}/uploads/{}", self.base_url, public_id) }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, folder: &str, file_name: &str, bytes: &[u8]) -> Result<StoredMedia, ServiceError> {
        if bytes.is_empty() {
            return Err(ServiceError::validation("empty file"));
        }
        check_folder(folder)?;
        let ext = image_extension(file_name)?;
        let dir = self.root.join(folder);
        tokio::fs::create_dir_all(&dir).await?;
        let name = format!("{}.{}", Uuid::new_v4(), ext);
        tokio::fs::write(dir.join(&name), bytes).await?;
        let public_id = format!("{folder}/{name}");
        let url = self.url_for(&public_id);
        info!(public_id = %public_id, "media_stored");
        Ok(StoredMedia { secure_url: url.clone(), url, public_id })
    }

    async fn remove(&self, public_id: &str) -> Result<(), ServiceError> {
        if public_id.contains("..") {
            return Err(ServiceError::validation("invalid public id"));
        }
        match tokio::fs::remove_file(self.root.join(public_id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(public_id, "media already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn public_id_of(&self, url: &str) -> Option<String> {
        url.split_once("/uploads/").map(|(_, id)| id.to_string())
    }
}

/// In-memory store for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockMediaStore {
        pub files: Mutex<HashMap<String, usize>>,
    }

    #[async_trait]
    impl MediaStore for MockMediaStore {
        async fn put(&self, folder: &str, file_name: &str, bytes: &[u8]) -> Result<StoredMedia, ServiceError> {
            if bytes.is_empty() {
                return Err(ServiceError::validation("empty file"));
            }
            let ext = image_extension(file_name)?;
            let public_id = format!("{folder}/{}.{ext}", Uuid::new_v4());
            self.files.lock().unwrap().insert(public_id.clone(), bytes.len());
            let url = format!("/uploads/{public_id}");
            Ok(StoredMedia { secure_url: url.clone(), url, public_id })
        }

        async fn remove(&self, public_id: &str) -> Result<(), ServiceError> {
            self.files
                .lock()
                .unwrap()
                .remove(public_id)
                .map(|_| ())
                .ok_or_else(|| ServiceError::Storage(format!("{public_id} missing")))
        }

        fn public_id_of(&self, url: &str) -> Option<String> {
            url.strip_prefix("/uploads/").map(str::to_string)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_images_are_accepted() {
        assert_eq!(image_extension("Logo.PNG").unwrap(), "png");
        assert!(image_extension("cv.pdf").is_err());
        assert!(image_extension("noext").is_err());
    }

    #[tokio::test]
    async fn local_store_writes_and_removes() {
        let root = std::env::temp_dir().join(format!("media-{}", Uuid::new_v4()));
        let store = LocalMediaStore::new(&root, "http://localhost:3000/");
        let m = store.put("blogs", "cover.jpg", b"jpeg-bytes").await.unwrap();
        assert!(m.url.starts_with("http://localhost:3000/uploads/blogs/"));
        assert_eq!(m.url, m.secure_url);
        assert!(root.join(&m.public_id).exists());
        assert_eq!(store.public_id_of(&m.url).as_deref(), Some(m.public_id.as_str()));

        store.remove(&m.public_id).await.unwrap();
        assert!(!root.join(&m.public_id).exists());
        // removing twice is not an error
        store.remove(&m.public_id).await.unwrap();
        let _ = tokio::fs::remove_dir_all(&root).await;
    }

    #[tokio::test]
    async fn empty_payload_and_bad_folder_rejected() {
        let store = LocalMediaStore::new(std::env::temp_dir(), "");
        assert!(matches!(store.put("blogs", "a.png", b"").await, Err(ServiceError::Validation(_))));
        assert!(matches!(store.put("../etc", "a.png", b"x").await, Err(ServiceError::Validation(_))));
    }
}
