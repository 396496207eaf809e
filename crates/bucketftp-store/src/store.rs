//! The [`ObjectStore`] trait and the listing entry it yields.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::error::StoreResult;

/// A single entry from a bucket listing.
///
/// Listings are the sole source of object metadata: there is no per-key
/// stat path. An entry is an ephemeral value constructed fresh for every
/// listing call and carries no identity beyond its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    /// The object key, used verbatim as a path-shaped string.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
    /// Last-modified timestamp reported by the backend.
    pub last_modified: DateTime<Utc>,
}

/// Abstract object-storage client.
///
/// The backend model is a flat, immutable key→blob namespace: whole-object
/// PUT and bulk listing are the only primitives. Implementations must be
/// safe for concurrent use by multiple sessions (`Send + Sync`); the trait
/// uses `#[async_trait]` because it must be object-safe for dynamic
/// dispatch (`Arc<dyn ObjectStore>`).
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// List every object in `bucket` with one unprefixed request.
    ///
    /// Order is whatever the backend returns; callers must not assume a
    /// sort order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::List`] when the backend request fails;
    /// no entries are fabricated on partial failure.
    async fn list_objects(&self, bucket: &str) -> StoreResult<Vec<ObjectEntry>>;

    /// Store `body` as the complete object at `key` in `bucket`.
    ///
    /// The PUT is atomic at the backend: on failure the key's prior state
    /// (present or absent) is unchanged and no partial object is visible.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Put`] when the backend request fails.
    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> StoreResult<()>;
}
