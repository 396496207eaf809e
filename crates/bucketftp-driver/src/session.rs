//! The per-session filesystem backed by one bucket.

use std::sync::Arc;

use tracing::{debug, info, warn};

use async_trait::async_trait;
use bucketftp_core::FileMode;
use bucketftp_store::ObjectStore;

use crate::capability::{FileHandle, FileInfo, OpenMode, SessionFilesystem};
use crate::error::{DriverError, DriverResult};
use crate::metadata::ObjectMetadata;
use crate::upload::PendingUpload;

/// Filesystem view of one bucket for one authenticated session.
///
/// The bucket namespace is flat, so directory operations are accepted and
/// ignored, metadata comes only from bulk listing, and every mutation
/// other than whole-object upload is refused. Refusals never touch the
/// backend.
pub struct S3SessionFs {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl std::fmt::Debug for S3SessionFs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3SessionFs")
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl S3SessionFs {
    /// Create a session filesystem over `bucket`.
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl SessionFilesystem for S3SessionFs {
    async fn change_directory(&mut self, path: &str) -> DriverResult<()> {
        // Accepted so clients can navigate; the flat namespace keeps no
        // working-directory state.
        info!(bucket = %self.bucket, path, "directory change accepted");
        Ok(())
    }

    async fn make_directory(&mut self, path: &str) -> DriverResult<()> {
        info!(bucket = %self.bucket, path, "directory creation accepted, nothing materialized");
        Ok(())
    }

    async fn list_files(&mut self) -> DriverResult<Vec<Box<dyn FileInfo>>> {
        let entries = self.store.list_objects(&self.bucket).await.map_err(|e| {
            warn!(bucket = %self.bucket, error = %e, "listing failed");
            DriverError::Backend(e)
        })?;

        debug!(bucket = %self.bucket, count = entries.len(), "listed session files");
        Ok(entries
            .into_iter()
            .map(|entry| Box::new(ObjectMetadata::from(entry)) as Box<dyn FileInfo>)
            .collect())
    }

    async fn open_file(&mut self, path: &str, mode: OpenMode) -> DriverResult<Box<dyn FileHandle>> {
        match mode {
            OpenMode::Read => {
                warn!(bucket = %self.bucket, path, "read open refused, uploads only");
                Err(DriverError::UnsupportedOperation {
                    operation: "open for read",
                })
            }
            OpenMode::Write => {
                info!(bucket = %self.bucket, path, "opened upload handle");
                Ok(Box::new(PendingUpload::new(
                    self.store.clone(),
                    self.bucket.clone(),
                    path,
                )))
            }
        }
    }

    async fn delete_file(&mut self, path: &str) -> DriverResult<()> {
        warn!(bucket = %self.bucket, path, "delete refused");
        Err(DriverError::PermissionDenied {
            operation: "delete",
        })
    }

    async fn stat_file(&mut self, path: &str) -> DriverResult<Box<dyn FileInfo>> {
        warn!(bucket = %self.bucket, path, "stat refused, metadata comes from listing");
        Err(DriverError::UnsupportedOperation { operation: "stat" })
    }

    async fn rename_file(&mut self, from: &str, to: &str) -> DriverResult<()> {
        warn!(bucket = %self.bucket, from, to, "rename refused");
        Err(DriverError::PermissionDenied {
            operation: "rename",
        })
    }

    async fn can_allocate(&mut self, size: u64) -> DriverResult<bool> {
        warn!(bucket = %self.bucket, size, "allocation refused");
        Err(DriverError::AllocationDenied)
    }

    async fn chmod_file(&mut self, path: &str, mode: FileMode) -> DriverResult<()> {
        warn!(bucket = %self.bucket, path, %mode, "chmod refused, permission bits are synthetic");
        Err(DriverError::PermissionDenied { operation: "chmod" })
    }
}
