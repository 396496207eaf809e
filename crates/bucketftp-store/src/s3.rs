//! S3-backed [`ObjectStore`] built on the AWS SDK.
//!
//! The client is constructed from explicitly injected credentials; no
//! ambient credential chain (instance profiles, shared config files) is
//! ever consulted. An optional endpoint override with forced path-style
//! addressing supports S3-compatible servers in local development.

use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::DateTime;
use tracing::debug;

use async_trait::async_trait;
use bucketftp_core::BucketFtpError;

use crate::error::{StoreError, StoreResult};
use crate::store::{ObjectEntry, ObjectStore};

/// Default region when `AWS_REGION` is unset.
const DEFAULT_REGION: &str = "us-east-1";

// ---------------------------------------------------------------------------
// S3StoreConfig
// ---------------------------------------------------------------------------

/// Connection settings for [`S3ObjectStore`].
#[derive(Clone)]
pub struct S3StoreConfig {
    /// AWS access key id.
    pub access_key_id: String,
    /// AWS secret access key.
    pub secret_access_key: String,
    /// Target region.
    pub region: String,
    /// Optional endpoint override for S3-compatible servers. When set, the
    /// client also forces path-style addressing.
    pub endpoint_url: Option<String>,
}

impl std::fmt::Debug for S3StoreConfig {
    // The secret key must never reach log output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3StoreConfig")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("region", &self.region)
            .field("endpoint_url", &self.endpoint_url)
            .finish()
    }
}

impl S3StoreConfig {
    /// Load connection settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`BucketFtpError::MissingEnv`] if `AWS_ACCESS_KEY_ID` or
    /// `AWS_SECRET_ACCESS_KEY` is unset.
    pub fn from_env() -> Result<Self, BucketFtpError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load connection settings through a variable lookup function.
    ///
    /// `from_env` delegates here; tests supply a closure over a map instead
    /// of mutating process-global environment state.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, BucketFtpError> {
        Ok(Self {
            access_key_id: require(&lookup, "AWS_ACCESS_KEY_ID")?,
            secret_access_key: require(&lookup, "AWS_SECRET_ACCESS_KEY")?,
            region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_owned()),
            endpoint_url: lookup("S3_ENDPOINT_URL"),
        })
    }
}

/// Look up a required variable, failing with a typed error when absent.
fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, BucketFtpError> {
    lookup(var).ok_or(BucketFtpError::MissingEnv { var })
}

// ---------------------------------------------------------------------------
// S3ObjectStore
// ---------------------------------------------------------------------------

/// [`ObjectStore`] implementation backed by the AWS S3 SDK.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
}

impl S3ObjectStore {
    /// Wrap an already-configured SDK client.
    #[must_use]
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        Self { client }
    }

    /// Build a client from explicit connection settings.
    ///
    /// Credentials come only from `config`; the SDK's default provider
    /// chain is bypassed entirely.
    #[must_use]
    pub fn connect(config: &S3StoreConfig) -> Self {
        let creds = aws_credential_types::Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
            None,
            "bucketftp-static",
        );

        let mut builder = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(creds);

        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self::new(aws_sdk_s3::Client::from_conf(builder.build()))
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_objects(&self, bucket: &str) -> StoreResult<Vec<ObjectEntry>> {
        // Single unpaginated request; the listing contract exposes at most
        // one page of keys.
        let output = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| StoreError::List {
                bucket: bucket.to_owned(),
                source: anyhow::Error::new(e),
            })?;

        let entries: Vec<ObjectEntry> = output.contents().iter().filter_map(to_entry).collect();
        debug!(bucket, count = entries.len(), "listed bucket");
        Ok(entries)
    }

    async fn put_object(&self, bucket: &str, key: &str, body: Bytes) -> StoreResult<()> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StoreError::Put {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                source: anyhow::Error::new(e),
            })?;

        debug!(bucket, key, size, "uploaded object");
        Ok(())
    }
}

/// Convert an SDK listing object into an [`ObjectEntry`].
///
/// Entries without a key are skipped; missing size or timestamp fields
/// degrade to zero and the Unix epoch rather than failing the listing.
fn to_entry(obj: &aws_sdk_s3::types::Object) -> Option<ObjectEntry> {
    let key = obj.key()?.to_owned();
    let size = obj.size().and_then(|s| u64::try_from(s).ok()).unwrap_or(0);
    let last_modified = obj
        .last_modified()
        .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()))
        .unwrap_or(DateTime::UNIX_EPOCH);

    Some(ObjectEntry {
        key,
        size,
        last_modified,
    })
}
