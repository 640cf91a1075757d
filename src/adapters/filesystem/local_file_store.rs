//! Sandboxed file store on the local filesystem.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncRead, AsyncWriteExt};
use tracing::{debug, instrument};

use crate::domain::errors::{FileError, FileResult};
use crate::domain::models::{FileInfo, FilesConfig};
use crate::domain::ports::{FileReader, FileStore};

/// [`FileStore`] keeping every file directly under `base_path`.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    base_path: PathBuf,
}

impl LocalFileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn from_config(config: &FilesConfig) -> Self {
        Self::new(config.base_path.clone())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Map a file name to its path under the base directory.
    ///
    /// Only a single normal path component is accepted, so `..`, absolute
    /// paths and nested directories can never leave the base directory.
    fn resolve(&self, name: &str) -> FileResult<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file_name)), None) => Ok(self.base_path.join(file_name)),
            _ => Err(FileError::InvalidName(name.to_string())),
        }
    }
}

fn not_found_as(name: &str) -> impl FnOnce(std::io::Error) -> FileError + '_ {
    move |err| {
        if err.kind() == ErrorKind::NotFound {
            FileError::NotFound(name.to_string())
        } else {
            FileError::Io(err)
        }
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    #[instrument(skip(self), err)]
    async fn list(&self) -> FileResult<Vec<FileInfo>> {
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            files.push(FileInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                size: metadata.len(),
                modified_at: metadata.modified().ok().map(DateTime::<Utc>::from),
            });
        }

        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    #[instrument(skip(self), err)]
    async fn open(&self, name: &str) -> FileResult<FileReader> {
        let path = self.resolve(name)?;
        let file = fs::File::open(&path).await.map_err(not_found_as(name))?;
        Ok(Box::new(file))
    }

    #[instrument(skip(self, content), err)]
    async fn upload(
        &self,
        name: &str,
        content: &mut (dyn AsyncRead + Send + Unpin),
    ) -> FileResult<u64> {
        let path = self.resolve(name)?;
        fs::create_dir_all(&self.base_path).await?;

        let mut file = fs::File::create(&path).await?;
        let written = tokio::io::copy(content, &mut file).await?;
        file.flush().await?;

        debug!(bytes = written, path = %path.display(), "stored upload");
        Ok(written)
    }

    #[instrument(skip(self), err)]
    async fn delete(&self, name: &str) -> FileResult<()> {
        let path = self.resolve(name)?;
        fs::remove_file(&path).await.map_err(not_found_as(name))
    }
}
