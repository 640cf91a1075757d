//! File metadata returned by the file store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A regular file under the file store's base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub name: String,
    pub size: u64,
    pub modified_at: Option<DateTime<Utc>>,
}
