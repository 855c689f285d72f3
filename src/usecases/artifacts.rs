//! Persists typed plugin data as JSON text through a TextStore.

use crate::adapters::persistence::JsonCodec;
use crate::domain::DomainError;
use crate::ports::TextStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub struct ArtifactService {
    store: Arc<dyn TextStore>,
    codec: JsonCodec,
}

impl ArtifactService {
    pub fn new(store: Arc<dyn TextStore>, codec: JsonCodec) -> Self {
        Self { store, codec }
    }

    /// Encodes `value` and waits for the write to land.
    pub async fn save<T: Serialize + ?Sized>(
        &self,
        path: &Path,
        value: &T,
    ) -> Result<(), DomainError> {
        let json = self.codec.to_json(value)?;
        self.store.write(path, json)?.await?;
        info!(path = %path.display(), "artifact saved");
        Ok(())
    }

    pub async fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T, DomainError> {
        let text = self.store.read(path).await?;
        self.codec.from_json(&text)
    }

    /// Like [`load`](Self::load), but `None` when nothing was saved yet.
    pub async fn load_optional<T: DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Option<T>, DomainError> {
        if !self.store.exists(path) {
            return Ok(None);
        }
        self.load(path).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::persistence::FsTextStore;
    use crate::domain::{Authority, MessageChain};
    use crate::usecases::authority::annotate_text;
    use std::collections::HashMap;

    fn service(dir: &Path, codec: JsonCodec) -> ArtifactService {
        ArtifactService::new(Arc::new(FsTextStore::new(dir)), codec)
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path(), JsonCodec::pretty());
        let chain = annotate_text("hi", Some(Authority::Owner));

        svc.save(Path::new("replies/last.json"), &chain).await.unwrap();
        let back: MessageChain = svc.load(Path::new("replies/last.json")).await.unwrap();
        assert_eq!(back, chain);
    }

    #[tokio::test]
    async fn test_load_optional_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let svc = service(dir.path(), JsonCodec::new());
        let res: Option<HashMap<String, i64>> =
            svc.load_optional(Path::new("absent.json")).await.unwrap();
        assert!(res.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_artifact_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{oops").unwrap();
        let svc = service(dir.path(), JsonCodec::new());
        let res: Result<Option<Vec<i32>>, _> = svc.load_optional(Path::new("bad.json")).await;
        assert!(matches!(res, Err(DomainError::Json(_))));
    }
}
