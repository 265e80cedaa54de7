use async_trait::async_trait;
use thiserror::Error;

mod filesystem;

pub use filesystem::FilesystemFileStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("stored file not found: {0}")]
    NotFound(String),
    #[error("storage IO error")]
    Io(#[from] std::io::Error),
    #[error("invalid storage path: {0}")]
    InvalidPath(String),
}

/// Path-addressed durable byte storage.
///
/// Paths are relative, slash-separated keys like `images/<uuid>.png`. The
/// caller derives them before upload; the store never invents names.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Persist `content` under `path`, overwriting any previous content.
    async fn put(&self, path: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Retrieve the bytes stored under `path`.
    async fn get(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Check whether anything is stored under `path`.
    async fn exists(&self, path: &str) -> Result<bool, StorageError>;

    /// Delete the file under `path`.
    ///
    /// Returns `true` if the file was deleted, `false` if it did not exist.
    async fn delete(&self, path: &str) -> Result<bool, StorageError>;
}
