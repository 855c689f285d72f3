//! Mock image uploader for running without a connected bot.
//!
//! Checks the local file exists and hands back a synthetic image id instead of
//! calling the host framework.

use crate::domain::{DomainError, Segment};
use crate::ports::ImageUploader;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Mock uploader. Records every upload so callers can inspect them.
pub struct MockImageUploader {
    uploads: Mutex<Vec<(PathBuf, i64)>>,
}

impl MockImageUploader {
    pub fn new() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
        }
    }

    /// Uploads seen so far, oldest first.
    pub fn uploads(&self) -> Vec<(PathBuf, i64)> {
        self.uploads
            .lock()
            .map(|u| u.clone())
            .unwrap_or_default()
    }
}

impl Default for MockImageUploader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ImageUploader for MockImageUploader {
    async fn upload_image(&self, path: &Path, contact_id: i64) -> Result<Segment, DomainError> {
        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| DomainError::Media(format!("{}: {}", path.display(), e)))?;
        if !meta.is_file() {
            return Err(DomainError::Media(format!(
                "{} is not a file",
                path.display()
            )));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(path = %path.display(), contact_id, "[MOCK] Simulating image upload");
        if let Ok(mut uploads) = self.uploads.lock() {
            uploads.push((path.to_path_buf(), contact_id));
        }
        Ok(Segment::Image {
            id: format!("{{{}-{}}}", contact_id, name),
        })
    }
}
