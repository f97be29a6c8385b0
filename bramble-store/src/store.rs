use std::path::PathBuf;
use std::sync::Arc;

use tracing::warn;

use crate::model::document::StoreDocument;

/// Shared persistence handle passed across crates.
///
/// Every mutation is a full read-modify-write of the backing document,
/// serialized behind an async mutex so interleaved command invocations
/// cannot lose each other's updates. Reads load the document without
/// taking the lock.
#[derive(Clone, Debug)]
pub struct Store {
    backend: StoreBackend,
    write_lock: Arc<tokio::sync::Mutex<()>>,
}

#[derive(Clone, Debug)]
enum StoreBackend {
    File(FileMedium),
    Memory(MemoryMedium),
}

impl Store {
    /// Create a store backed by a JSON document at `path`.
    ///
    /// The file is created lazily on first mutation; a missing or corrupt
    /// document reads as the empty document.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: StoreBackend::File(FileMedium { path: path.into() }),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Create a store backed by an in-memory buffer, for tests.
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory(MemoryMedium::default()),
            write_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    pub(crate) async fn load_document(&self) -> StoreDocument {
        let raw = match &self.backend {
            StoreBackend::File(medium) => medium.load().await,
            StoreBackend::Memory(medium) => medium.load(),
        };

        let raw = match raw {
            Ok(raw) => raw,
            Err(source) => {
                warn!(?source, "failed to read store document; starting empty");
                None
            }
        };

        let Some(raw) = raw else {
            return StoreDocument::default();
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(source) => {
                warn!(?source, "store document corrupt; starting empty");
                StoreDocument::default()
            }
        }
    }

    pub(crate) async fn persist_document(&self, document: &StoreDocument) -> anyhow::Result<()> {
        let raw = serde_json::to_string_pretty(document)?;

        match &self.backend {
            StoreBackend::File(medium) => medium.persist(&raw).await,
            StoreBackend::Memory(medium) => medium.persist(raw),
        }
    }

    /// Run one serialized read-modify-write cycle against the document.
    pub(crate) async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut StoreDocument) -> T,
    ) -> anyhow::Result<T> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load_document().await;
        let value = apply(&mut document);
        self.persist_document(&document).await?;
        Ok(value)
    }
}

#[derive(Clone, Debug)]
struct FileMedium {
    path: PathBuf,
}

impl FileMedium {
    async fn load(&self) -> anyhow::Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(source.into()),
        }
    }

    async fn persist(&self, contents: &str) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
struct MemoryMedium {
    contents: Arc<std::sync::Mutex<Option<String>>>,
}

impl MemoryMedium {
    fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(self
            .contents
            .lock()
            .map_err(|_| anyhow::anyhow!("memory medium poisoned"))?
            .clone())
    }

    fn persist(&self, raw: String) -> anyhow::Result<()> {
        *self
            .contents
            .lock()
            .map_err(|_| anyhow::anyhow!("memory medium poisoned"))? = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Store;

    #[tokio::test]
    async fn missing_file_loads_as_empty_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Store::file(dir.path().join("storage.json"));

        let document = store.load_document().await;
        assert!(document.warnings.is_empty());
        assert!(document.settings.is_empty());
        assert!(document.tasks.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_as_empty_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "{ not json").expect("write corrupt file");

        let store = Store::file(&path);
        let document = store.load_document().await;
        assert!(document.warnings.is_empty());
        assert!(document.settings.is_empty());
    }

    #[tokio::test]
    async fn document_without_task_fields_still_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"warnings": {}, "settings": {}}"#).expect("write file");

        let store = Store::file(&path);
        let document = store.load_document().await;
        assert!(document.tasks.is_empty());
        assert_eq!(document.next_task_id, 1);
    }

    #[tokio::test]
    async fn mutation_round_trips_through_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let store = Store::file(&path);
        store
            .mutate(|document| {
                document
                    .settings
                    .entry("1".to_owned())
                    .or_default()
                    .insert("modRole".to_owned(), "42".to_owned());
            })
            .await
            .expect("mutate");

        // Reopen against the same path to prove the write is durable.
        let reopened = Store::file(&path);
        let document = reopened.load_document().await;
        assert_eq!(
            document
                .settings
                .get("1")
                .and_then(|settings| settings.get("modRole"))
                .map(String::as_str),
            Some("42")
        );
    }
}
