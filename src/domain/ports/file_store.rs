//! File store port.

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::domain::errors::FileResult;
use crate::domain::models::FileInfo;

/// Readable handle to a stored file.
pub type FileReader = Box<dyn AsyncRead + Send + Unpin>;

/// Flat file storage rooted at a single base directory.
///
/// Names are plain file names; anything that would resolve outside the base
/// directory is rejected with `FileError::InvalidName`.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// List regular files directly under the base directory, sorted by name.
    async fn list(&self) -> FileResult<Vec<FileInfo>>;

    /// Open a file for reading.
    async fn open(&self, name: &str) -> FileResult<FileReader>;

    /// Write `content` to `name`, creating or truncating it. Returns bytes written.
    async fn upload(
        &self,
        name: &str,
        content: &mut (dyn AsyncRead + Send + Unpin),
    ) -> FileResult<u64>;

    /// Delete a file.
    async fn delete(&self, name: &str) -> FileResult<()>;
}
