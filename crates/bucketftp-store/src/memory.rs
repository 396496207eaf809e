//! In-memory [`ObjectStore`] for tests and local development.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::trace;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::store::{ObjectEntry, ObjectStore};

/// Composite key identifying a stored object: `(bucket, key)`.
type StorageKey = (String, String);

/// A stored object body together with its listing metadata.
#[derive(Debug, Clone)]
struct StoredObject {
    body: Bytes,
    last_modified: DateTime<Utc>,
}

/// Thread-safe in-memory [`ObjectStore`].
///
/// Buckets are implicit: any bucket name lists as empty until an object is
/// written into it, and a PUT never fails. Useful for tests and for running
/// the server without a real storage backend.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: DashMap<StorageKey, StoredObject>,
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectStore")
            .field("objects_count", &self.objects.len())
            .finish()
    }
}

impl InMemoryObjectStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an object directly, bypassing the trait.
    ///
    /// Tests use this to stage listing contents with a chosen timestamp.
    pub fn insert_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        last_modified: DateTime<Utc>,
    ) {
        self.objects.insert(
            (bucket.to_owned(), key.to_owned()),
            StoredObject {
                body,
                last_modified,
            },
        );
    }

    /// Fetch a stored object body, if present.
    #[must_use]
    pub fn object(&self, bucket: &str, key: &str) -> Option<Bytes> {
        self.objects
            .get(&(bucket.to_owned(), key.to_owned()))
            .map(|stored| stored.body.clone())
    }

    /// Number of stored objects across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Remove every stored object.
    pub fn reset(&self) {
        self.objects.clear();
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn list_objects(&self, bucket: &str) -> StoreResult<Vec<ObjectEntry>> {
        let entries: Vec<ObjectEntry> = self
            .objects
            .iter()
            .filter(|item| item.key().0 == bucket)
            .map(|item| ObjectEntry {
                key: item.key().1.clone(),
                size: item.value().body.len() as u64,
                last_modified: item.value().last_modified,
            })
            .collect();

        trace!(bucket, count = entries.len(), "listed in-memory bucket");
        Ok(entries)
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> StoreResult<()> {
        trace!(bucket, key, size = body.len(), "stored in-memory object");
        self.insert_object(bucket, key, body, Utc::now());
        Ok(())
    }
}
