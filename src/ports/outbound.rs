//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use super::PendingIo;
use crate::domain::{DomainError, Segment};
use std::path::Path;

/// Path-addressed UTF-8 text storage with create-on-first-write.
///
/// `read` and the content phase of `write` run on the async runtime; the
/// returned [`PendingIo`] may be awaited or dropped (dropping does not cancel).
/// Concurrent writes to the same path are not serialized: whichever scheduled
/// write finishes last determines the content, and a reader racing a writer may
/// see a partial file on storage without atomic replace.
pub trait TextStore: Send + Sync {
    /// Pure existence check.
    fn exists(&self, path: &Path) -> bool;

    /// Creates missing ancestor directories, then an empty file. Synchronous.
    /// Callers must ensure `path` does not exist yet.
    fn create(&self, path: &Path) -> Result<(), DomainError>;

    /// Reads the whole file as UTF-8.
    fn read(&self, path: &Path) -> PendingIo<String>;

    /// Creates `path` if missing (synchronously), then schedules a full overwrite.
    fn write(&self, path: &Path, text: String) -> Result<PendingIo<()>, DomainError>;
}

/// Image upload through the host bot framework.
#[async_trait::async_trait]
pub trait ImageUploader: Send + Sync {
    /// Uploads the local image at `path` for `contact_id` and returns the
    /// resulting image segment.
    async fn upload_image(&self, path: &Path, contact_id: i64) -> Result<Segment, DomainError>;
}
