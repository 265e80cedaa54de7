use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{FileStore, StorageError};

/// Filesystem-backed file store rooted at a media directory.
///
/// Stored keys map directly onto paths below the root, so
/// `images/<uuid>.png` lands at `{root}/images/<uuid>.png`.
pub struct FilesystemFileStore {
    root: PathBuf,
}

impl FilesystemFileStore {
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Resolve a storage key to a path under the root, rejecting keys that
    /// could escape it.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        if path.is_empty() || Path::new(path).is_absolute() {
            return Err(StorageError::InvalidPath(path.to_owned()));
        }
        for segment in path.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(StorageError::InvalidPath(path.to_owned()));
            }
        }
        Ok(self.root.join(path))
    }
}

#[async_trait]
impl FileStore for FilesystemFileStore {
    async fn put(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let full = self.resolve(path)?;
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&full, content).await?;
        Ok(())
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let full = self.resolve(path)?;
        match fs::read(&full).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(path.to_owned()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let full = self.resolve(path)?;
        Ok(fs::try_exists(&full).await?)
    }

    async fn delete(&self, path: &str) -> Result<bool, StorageError> {
        let full = self.resolve(path)?;
        match fs::remove_file(&full).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> (FilesystemFileStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemFileStore::new(dir.path().join("media"))
            .await
            .unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn put_get_round_trip() {
        let (store, _dir) = temp_store().await;
        store.put("images/a.png", b"png bytes").await.unwrap();
        let retrieved = store.get("images/a.png").await.unwrap();
        assert_eq!(retrieved, b"png bytes");
    }

    #[tokio::test]
    async fn put_creates_namespace_directories() {
        let (store, dir) = temp_store().await;
        store.put("images/nested.jpg", b"x").await.unwrap();
        assert!(dir.path().join("media/images/nested.jpg").exists());
    }

    #[tokio::test]
    async fn get_not_found() {
        let (store, _dir) = temp_store().await;
        let result = store.get("images/missing.png").await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn exists_works() {
        let (store, _dir) = temp_store().await;
        store.put("images/here.gif", b"g").await.unwrap();
        assert!(store.exists("images/here.gif").await.unwrap());
        assert!(!store.exists("images/gone.gif").await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_file() {
        let (store, _dir) = temp_store().await;
        store.put("images/doomed.png", b"d").await.unwrap();

        assert!(store.delete("images/doomed.png").await.unwrap());
        assert!(!store.exists("images/doomed.png").await.unwrap());
    }

    #[tokio::test]
    async fn delete_nonexistent_returns_false() {
        let (store, _dir) = temp_store().await;
        assert!(!store.delete("images/never-stored.png").await.unwrap());
    }

    #[tokio::test]
    async fn rejects_traversal_and_absolute_paths() {
        let (store, _dir) = temp_store().await;
        assert!(matches!(
            store.put("../escape.png", b"x").await,
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            store.put("images/../../escape.png", b"x").await,
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            store.put("/etc/passwd", b"x").await,
            Err(StorageError::InvalidPath(_))
        ));
        assert!(matches!(
            store.put("", b"x").await,
            Err(StorageError::InvalidPath(_))
        ));
    }
}
