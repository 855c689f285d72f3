//! Implements TextStore on the local filesystem.
//!
//! Existence checks and file creation are synchronous so a file exists before
//! any dependent write is scheduled. Content I/O runs on the tokio runtime.

use crate::domain::DomainError;
use crate::ports::{PendingIo, TextStore};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Filesystem text store. Relative paths resolve against `base_dir`.
pub struct FsTextStore {
    base_dir: PathBuf,
}

impl FsTextStore {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Store rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute paths are kept as-is; `Path::join` replaces the base for them.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

impl TextStore for FsTextStore {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).exists()
    }

    fn create(&self, path: &Path) -> Result<(), DomainError> {
        let full = std::path::absolute(self.resolve(path))
            .map_err(|e| DomainError::Storage(format!("resolve {}: {}", path.display(), e)))?;
        if let Some(parent) = full.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DomainError::Storage(format!("create dir {}: {}", parent.display(), e))
                })?;
                debug!(path = %parent.display(), "created parent directories");
            }
        }
        std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&full)
            .map_err(|e| DomainError::Storage(format!("create file {}: {}", full.display(), e)))?;
        info!(path = %full.display(), "created file");
        Ok(())
    }

    fn read(&self, path: &Path) -> PendingIo<String> {
        let full = self.resolve(path);
        PendingIo::spawn(async move {
            let bytes = fs::read(&full)
                .await
                .map_err(|e| DomainError::Storage(format!("read {}: {}", full.display(), e)))?;
            String::from_utf8(bytes).map_err(|e| {
                DomainError::Storage(format!("decode {} as UTF-8: {}", full.display(), e))
            })
        })
    }

    fn write(&self, path: &Path, text: String) -> Result<PendingIo<()>, DomainError> {
        if !self.exists(path) {
            self.create(path)?;
        }
        let full = self.resolve(path);
        Ok(PendingIo::spawn(async move {
            fs::write(&full, text.as_bytes())
                .await
                .map_err(|e| DomainError::Storage(format!("write {}: {}", full.display(), e)))?;
            debug!(path = %full.display(), bytes = text.len(), "wrote file");
            Ok(())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_then_read_on_fresh_tree() {
        let dir = tempdir().unwrap();
        let store = FsTextStore::new(dir.path());
        let path = Path::new("logs/today.txt");

        assert!(!store.exists(path));
        let pending = store.write(path, "hello".to_string()).unwrap();
        // Creation happens before the write is scheduled.
        assert!(dir.path().join("logs").is_dir());
        assert!(store.exists(path));
        pending.await.unwrap();

        assert_eq!(store.read(path).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_create_makes_all_ancestors() {
        let dir = tempdir().unwrap();
        let store = FsTextStore::new(dir.path());
        let path = Path::new("a/b/c/file.txt");

        assert!(!store.exists(path));
        store.create(path).unwrap();
        assert!(dir.path().join("a/b/c").is_dir());
        assert!(store.exists(path));
        assert_eq!(store.read(path).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_create_existing_file_fails() {
        let dir = tempdir().unwrap();
        let store = FsTextStore::new(dir.path());
        let path = Path::new("dup.txt");
        store.create(path).unwrap();
        assert!(matches!(store.create(path), Err(DomainError::Storage(_))));
    }

    #[tokio::test]
    async fn test_write_replaces_content() {
        let dir = tempdir().unwrap();
        let store = FsTextStore::new(dir.path());
        let path = Path::new("notes.txt");

        store.write(path, "a much longer first body".into()).unwrap().await.unwrap();
        store.write(path, "short".into()).unwrap().await.unwrap();
        assert_eq!(store.read(path).await.unwrap(), "short");
    }

    #[tokio::test]
    async fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let store = FsTextStore::new(dir.path());
        let res = store.read(Path::new("nope.txt")).await;
        assert!(matches!(res, Err(DomainError::Storage(_))));
    }

    #[tokio::test]
    async fn test_read_invalid_utf8_fails() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("bin.dat"), [0xffu8, 0xfe, 0x00]).unwrap();
        let store = FsTextStore::new(dir.path());
        let res = store.read(Path::new("bin.dat")).await;
        assert!(matches!(res, Err(DomainError::Storage(msg)) if msg.contains("UTF-8")));
    }

    #[tokio::test]
    async fn test_absolute_path_ignores_base_dir() {
        let dir = tempdir().unwrap();
        let store = FsTextStore::new("/definitely/not/used");
        let abs = dir.path().join("abs.txt");
        store.write(&abs, "x".into()).unwrap().await.unwrap();
        assert_eq!(std::fs::read_to_string(&abs).unwrap(), "x");
    }

    #[test]
    fn test_read_outside_runtime_is_runtime_error() {
        let dir = tempdir().unwrap();
        let store = FsTextStore::new(dir.path());
        let pending = store.read(Path::new("x.txt"));
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        assert!(matches!(rt.block_on(pending), Err(DomainError::Runtime(_))));
    }
}
