//! The write-buffering file handle.

use std::io::SeekFrom;
use std::sync::Arc;

use bytes::BytesMut;
use tracing::{info, trace, warn};

use async_trait::async_trait;
use bucketftp_store::ObjectStore;

use crate::capability::FileHandle;
use crate::error::{DriverError, DriverResult};

/// An upload in progress: bytes accumulate in memory and become a single
/// object when the handle is closed.
///
/// The handle is bound at creation to exactly one `(store, bucket, key)`
/// triple and owns its buffer exclusively. The buffer is unbounded at this
/// layer; bounding upload size is a deployment concern. Until `close`
/// commits, the backend sees nothing of this upload, and the committed
/// bytes are the exact in-order concatenation of all `write` payloads.
pub struct PendingUpload {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    key: String,
    buffer: BytesMut,
}

impl std::fmt::Debug for PendingUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingUpload")
            .field("bucket", &self.bucket)
            .field("key", &self.key)
            .field("buffered", &self.buffer.len())
            .finish()
    }
}

impl PendingUpload {
    /// Create an empty upload bound to `key` in `bucket`.
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
            key: key.into(),
            buffer: BytesMut::new(),
        }
    }
}

#[async_trait]
impl FileHandle for PendingUpload {
    async fn write(&mut self, buf: &[u8]) -> DriverResult<usize> {
        self.buffer.extend_from_slice(buf);
        trace!(
            bucket = %self.bucket,
            key = %self.key,
            appended = buf.len(),
            buffered = self.buffer.len(),
            "buffered upload bytes"
        );
        Ok(buf.len())
    }

    async fn read(&mut self, _buf: &mut [u8]) -> DriverResult<usize> {
        warn!(bucket = %self.bucket, key = %self.key, "read refused on write-only handle");
        Err(DriverError::UnsupportedOperation { operation: "read" })
    }

    async fn seek(&mut self, _pos: SeekFrom) -> DriverResult<u64> {
        warn!(bucket = %self.bucket, key = %self.key, "seek refused on write-only handle");
        Err(DriverError::UnsupportedOperation { operation: "seek" })
    }

    async fn close(self: Box<Self>) -> DriverResult<()> {
        let Self {
            store,
            bucket,
            key,
            buffer,
        } = *self;

        let size = buffer.len();
        match store.put_object(&bucket, &key, buffer.freeze()).await {
            Ok(()) => {
                info!(bucket = %bucket, key = %key, size, "committed upload");
                Ok(())
            }
            Err(e) => {
                warn!(bucket = %bucket, key = %key, size, error = %e, "upload commit failed");
                Err(DriverError::Backend(e))
            }
        }
    }
}
