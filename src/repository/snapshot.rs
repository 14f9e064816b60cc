//! File-backed JSON snapshot store
//!
//! One file per logical collection, written whole after every mutation
//! (last-write-wins). Writes go through a temp file and an atomic rename
//! so a crash never leaves a half-written snapshot behind.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct SnapshotStore {
    base_path: PathBuf,
}

impl SnapshotStore {
    /// Create a new snapshot store rooted at the given directory.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn collection_path(&self, collection: &str) -> AppResult<PathBuf> {
        Self::validate_collection(collection)?;
        Ok(self.base_path.join(format!("{}.json", collection)))
    }

    /// Validate that a collection name is safe for use as a filename.
    /// Rejects path separators, `..`, and control characters.
    fn validate_collection(collection: &str) -> AppResult<()> {
        if collection.is_empty() {
            return Err(AppError::Internal("collection name cannot be empty".to_string()));
        }
        if collection.contains('/')
            || collection.contains('\\')
            || collection.contains("..")
            || collection.contains('\0')
            || collection.chars().any(|c| c.is_control())
        {
            return Err(AppError::Internal(format!(
                "collection name contains invalid characters: {collection:?}"
            )));
        }
        Ok(())
    }

    /// Load a collection snapshot, `None` when it has never been written.
    pub async fn load<T: DeserializeOwned>(&self, collection: &str) -> AppResult<Option<T>> {
        let path = self.collection_path(collection)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = tokio::fs::read_to_string(&path).await?;
        let value = serde_json::from_str(&content)
            .map_err(|e| AppError::Corrupt(format!("{collection}: {e}")))?;
        Ok(Some(value))
    }

    /// Overwrite a collection snapshot atomically.
    pub async fn save<T: Serialize>(&self, collection: &str, value: &T) -> AppResult<()> {
        if !self.base_path.exists() {
            tokio::fs::create_dir_all(&self.base_path).await?;
        }
        let path = self.collection_path(collection)?;
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| AppError::Internal(format!("serialize {collection}: {e}")))?;

        let tmp_path = self
            .base_path
            .join(format!(".{}.{}.tmp", collection, Uuid::new_v4().simple()));

        let write_result = async {
            let mut file = tokio::fs::File::create(&tmp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.flush().await?;
            file.sync_all().await?;
            drop(file);
            match tokio::fs::rename(&tmp_path, &path).await {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    tokio::fs::remove_file(&path).await?;
                    tokio::fs::rename(&tmp_path, &path).await?;
                }
                Err(e) => return Err(e),
            }
            Ok::<(), std::io::Error>(())
        }
        .await;

        if let Err(e) = write_result {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(AppError::Storage(e));
        }
        Ok(())
    }

    /// Delete a collection snapshot if it exists.
    pub async fn remove(&self, collection: &str) -> AppResult<()> {
        let path = self.collection_path(collection)?;
        if path.exists() {
            tokio::fs::remove_file(&path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        store.save("numbers", &vec![1, 2, 3]).await.unwrap();
        let loaded: Option<Vec<i32>> = store.load("numbers").await.unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn load_missing_collection_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());
        let loaded: Option<Vec<i32>> = store.load("nothing").await.unwrap();
        assert_eq!(loaded, None);
    }

    #[tokio::test]
    async fn save_overwrites_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        store.save("state", &"first").await.unwrap();
        store.save("state", &"second").await.unwrap();
        let loaded: Option<String> = store.load("state").await.unwrap();
        assert_eq!(loaded.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn remove_deletes_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());

        store.save("gone", &1).await.unwrap();
        store.remove("gone").await.unwrap();
        let loaded: Option<i32> = store.load("gone").await.unwrap();
        assert_eq!(loaded, None);
        // Removing twice is fine.
        store.remove("gone").await.unwrap();
    }

    #[tokio::test]
    async fn rejects_path_traversal() {
        let store = SnapshotStore::new("/base/path");
        assert!(store.load::<i32>("../../etc/passwd").await.is_err());
        assert!(store.load::<i32>("foo/bar").await.is_err());
        assert!(store.load::<i32>("foo\\bar").await.is_err());
        assert!(store.load::<i32>("").await.is_err());
    }

    #[tokio::test]
    async fn corrupt_snapshot_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(temp_dir.path());
        tokio::fs::write(temp_dir.path().join("bad.json"), b"{not json")
            .await
            .unwrap();
        assert!(store.load::<Vec<i32>>("bad").await.is_err());
    }
}
