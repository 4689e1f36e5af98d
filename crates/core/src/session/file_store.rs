//! File-based session storage implementation
//!
//! Stores the session as JSON in a file on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

use super::model::{Session, SessionStore};
use crate::{Error, Result};

/// File-based session store using JSON
pub struct FileSessionStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory copy of the session
    cache: RwLock<Option<Session>>,
}

impl FileSessionStore {
    /// File name used inside a data directory
    pub const FILE_NAME: &'static str = "session.json";

    /// Create a new FileSessionStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let session: Session = serde_json::from_str(&content).map_err(|e| {
                Error::Storage(format!("Failed to parse session file: {}", e))
            })?;
            Some(session)
        } else {
            None
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Open the session file inside `data_dir`
    pub async fn in_dir(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(data_dir.as_ref().join(Self::FILE_NAME)).await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Session>> {
        Ok(self.cache.read().await.clone())
    }

    async fn save(&self, session: Session) -> Result<()> {
        let content = serde_json::to_string_pretty(&session)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        debug!("Saved session for user {} to {:?}", session.user_id, self.path);
        *self.cache.write().await = Some(session);
        Ok(())
    }

    async fn clear(&self) -> Result<bool> {
        let existed = self.cache.write().await.take().is_some();
        if self.path.exists() {
            tokio::fs::remove_file(&self.path).await?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::UserId;
    use crate::category::SortMode;
    use tempfile::TempDir;

    async fn create_test_store() -> (FileSessionStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::in_dir(temp_dir.path()).await.unwrap();
        (store, temp_dir)
    }

    fn session() -> Session {
        Session::new(UserId::new(17).unwrap(), "ada@example.com")
    }

    #[tokio::test]
    async fn test_empty_store_has_no_session() {
        let (store, _temp) = create_test_store().await;
        assert!(store.load().await.unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let (store, _temp) = create_test_store().await;
        store.save(session()).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.user_id.get(), 17);
        assert_eq!(loaded.sort_mode, SortMode::Standard);
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("dir");

        {
            let store = FileSessionStore::in_dir(&nested).await.unwrap();
            store
                .save(session().with_sort_mode(SortMode::Recent))
                .await
                .unwrap();
        }

        {
            let store = FileSessionStore::in_dir(&nested).await.unwrap();
            let loaded = store.load().await.unwrap().unwrap();
            assert_eq!(loaded.email, "ada@example.com");
            assert_eq!(loaded.sort_mode, SortMode::Recent);
        }
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let (store, _temp) = create_test_store().await;
        store.save(session()).await.unwrap();

        assert!(store.clear().await.unwrap());
        assert!(store.load().await.unwrap().is_none());
        assert!(!store.path().exists());

        // Clearing again reports nothing was stored
        assert!(!store.clear().await.unwrap());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(FileSessionStore::FILE_NAME);
        std::fs::write(&path, "{not json").unwrap();

        match FileSessionStore::new(&path).await {
            Err(Error::Storage(msg)) => assert!(msg.contains("session")),
            Err(e) => panic!("Expected Storage error, got: {:?}", e),
            Ok(_) => panic!("Expected Storage error, got a store"),
        }
    }

    #[tokio::test]
    async fn test_non_positive_user_id_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(FileSessionStore::FILE_NAME);
        std::fs::write(
            &path,
            r#"{"user_id": 0, "email": "a@b.c", "signed_in_at": "2026-01-02T03:04:05Z"}"#,
        )
        .unwrap();

        assert!(matches!(
            FileSessionStore::new(&path).await,
            Err(Error::Storage(_))
        ));
    }

    #[tokio::test]
    async fn test_sort_mode_defaults_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(FileSessionStore::FILE_NAME);
        std::fs::write(
            &path,
            r#"{"user_id": 3, "email": "a@b.c", "signed_in_at": "2026-01-02T03:04:05Z"}"#,
        )
        .unwrap();

        let store = FileSessionStore::new(&path).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.sort_mode, SortMode::Standard);
    }
}
