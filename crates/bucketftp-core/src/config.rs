//! Configuration management for bucketftp.
//!
//! All configuration is driven by environment variables. Required variables
//! (the login pair and the bucket name) produce typed errors when absent;
//! the listen address and session cap fall back to defaults.

use crate::error::BucketFtpError;
use crate::types::Credentials;

/// Default listen host when `FTP_HOST` is unset.
const DEFAULT_LISTEN_HOST: &str = "localhost";

/// Default listen port when `FTP_PORT` is unset.
const DEFAULT_LISTEN_PORT: u16 = 21;

/// Default concurrent-session cap when `MAX_SESSIONS` is unset.
const DEFAULT_MAX_SESSIONS: usize = 100;

/// Global configuration for bucketftp.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketFtpConfig {
    /// Listen host handed to the protocol engine.
    pub listen_host: String,
    /// Listen port handed to the protocol engine.
    pub listen_port: u16,
    /// Login username for the single supported identity.
    pub username: String,
    /// Login password for the single supported identity.
    pub password: String,
    /// Name of the backing object-storage bucket.
    pub bucket: String,
    /// Maximum number of concurrent sessions.
    pub max_sessions: usize,
    /// Log level filter.
    pub log_level: String,
}

impl BucketFtpConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`BucketFtpError::MissingEnv`] if `FTP_USER`, `FTP_PASS`, or
    /// `S3_BUCKET_NAME` is unset, and [`BucketFtpError::InvalidEnv`] if
    /// `FTP_PORT` or `MAX_SESSIONS` cannot be parsed.
    pub fn from_env() -> Result<Self, BucketFtpError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// `from_env` delegates here; tests supply a closure over a map instead
    /// of mutating process-global environment state.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, BucketFtpError> {
        let listen_host = lookup("FTP_HOST").unwrap_or_else(|| DEFAULT_LISTEN_HOST.to_owned());
        let listen_port = match lookup("FTP_PORT") {
            Some(v) => v.parse().map_err(|_| BucketFtpError::InvalidEnv {
                var: "FTP_PORT",
                reason: format!("not a valid port number: {v}"),
            })?,
            None => DEFAULT_LISTEN_PORT,
        };
        let max_sessions = match lookup("MAX_SESSIONS") {
            Some(v) => v.parse().map_err(|_| BucketFtpError::InvalidEnv {
                var: "MAX_SESSIONS",
                reason: format!("not a valid session count: {v}"),
            })?,
            None => DEFAULT_MAX_SESSIONS,
        };

        Ok(Self {
            listen_host,
            listen_port,
            username: require(&lookup, "FTP_USER")?,
            password: require(&lookup, "FTP_PASS")?,
            bucket: require(&lookup, "S3_BUCKET_NAME")?,
            max_sessions,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_owned()),
        })
    }

    /// The configured login pair as a [`Credentials`] value.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.username, &self.password)
    }
}

/// Look up a required variable, failing with a typed error when absent.
fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, BucketFtpError> {
    lookup(var).ok_or(BucketFtpError::MissingEnv { var })
}
