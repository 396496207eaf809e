//! Integration tests for the bucketftp adapter.
//!
//! The full session flow (greeting, login, listing, upload) is exercised
//! against [`InMemoryObjectStore`]; no external services are required.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Once;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use bucketftp_core::BucketFtpConfig;
use bucketftp_driver::S3Driver;
use bucketftp_store::InMemoryObjectStore;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// The username every test logs in with.
pub const TEST_USER: &str = "ftpuser";

/// The password every test logs in with.
pub const TEST_PASS: &str = "hunter2";

/// The bucket every test driver serves.
pub const TEST_BUCKET: &str = "test-bucket";

/// A fixed timestamp for seeded objects.
#[must_use]
pub fn fixed_stamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0)
        .unwrap_or_else(|| panic!("timestamp out of range"))
}

/// Configuration as it would load from a minimal environment.
#[must_use]
pub fn test_config() -> BucketFtpConfig {
    let vars: HashMap<String, String> = [
        ("FTP_USER", TEST_USER),
        ("FTP_PASS", TEST_PASS),
        ("S3_BUCKET_NAME", TEST_BUCKET),
    ]
    .iter()
    .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
    .collect();

    BucketFtpConfig::from_lookup(|k| vars.get(k).cloned())
        .unwrap_or_else(|e| panic!("config load failed: {e}"))
}

/// Create a driver over `store` using the test configuration.
#[must_use]
pub fn test_driver(store: Arc<InMemoryObjectStore>) -> S3Driver {
    init_tracing();
    S3Driver::from_config(&test_config(), store)
}

/// Create an in-memory store seeded with `entries` of `(key, body)` in
/// the test bucket, all stamped with [`fixed_stamp`].
#[must_use]
pub fn seeded_store(entries: &[(&str, &[u8])]) -> Arc<InMemoryObjectStore> {
    let store = Arc::new(InMemoryObjectStore::new());
    for (key, body) in entries {
        store.insert_object(
            TEST_BUCKET,
            key,
            Bytes::copy_from_slice(body),
            fixed_stamp(),
        );
    }
    store
}

mod test_listing;
mod test_transfer;
