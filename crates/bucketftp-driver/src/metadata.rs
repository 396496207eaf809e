//! Listing metadata projected from storage entries.

use chrono::{DateTime, Utc};

use bucketftp_core::FileMode;
use bucketftp_store::ObjectEntry;

use crate::capability::FileInfo;

/// File metadata for one listed object.
///
/// A pure projection of an [`ObjectEntry`]: the key becomes the name, the
/// size and timestamp carry over, and the synthetic attributes are fixed
/// (`0o444` permission bits, never a directory). Constructed fresh per
/// listing and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    name: String,
    size: u64,
    modified: DateTime<Utc>,
}

impl From<ObjectEntry> for ObjectMetadata {
    fn from(entry: ObjectEntry) -> Self {
        Self {
            name: entry.key,
            size: entry.size,
            modified: entry.last_modified,
        }
    }
}

impl FileInfo for ObjectMetadata {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mode(&self) -> FileMode {
        FileMode::READ_ONLY
    }

    fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    fn is_dir(&self) -> bool {
        false
    }
}
