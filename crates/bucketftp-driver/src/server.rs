//! The server-level driver: settings, greeting, and the login gate.

use std::sync::Arc;

use tracing::{debug, info, warn};

use async_trait::async_trait;
use bucketftp_core::{BucketFtpConfig, Credentials};
use bucketftp_store::ObjectStore;

use crate::capability::{
    ServerDriver, ServerSettings, SessionContext, SessionFilesystem, TlsConfig,
};
use crate::error::{DriverError, DriverResult};
use crate::session::S3SessionFs;

/// Greeting line sent to every connecting session.
const GREETING: &str = "Welcome to S3 FTP Server";

/// [`ServerDriver`] exposing one bucket behind one fixed login pair.
///
/// Holds the immutable listen settings, the single supported credential
/// pair, and the shared store handle. Every successful login receives a
/// fresh [`S3SessionFs`] bound to the same store and bucket.
pub struct S3Driver {
    settings: ServerSettings,
    credentials: Credentials,
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl std::fmt::Debug for S3Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Driver")
            .field("settings", &self.settings)
            .field("credentials", &self.credentials)
            .field("bucket", &self.bucket)
            .finish()
    }
}

impl S3Driver {
    /// Create a driver from its parts.
    #[must_use]
    pub fn new(
        settings: ServerSettings,
        credentials: Credentials,
        store: Arc<dyn ObjectStore>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            credentials,
            store,
            bucket: bucket.into(),
        }
    }

    /// Create a driver from loaded configuration plus an injected store.
    #[must_use]
    pub fn from_config(config: &BucketFtpConfig, store: Arc<dyn ObjectStore>) -> Self {
        Self::new(
            ServerSettings::from(config),
            config.credentials(),
            store,
            config.bucket.clone(),
        )
    }
}

#[async_trait]
impl ServerDriver for S3Driver {
    fn settings(&self) -> ServerSettings {
        self.settings.clone()
    }

    fn welcome(&self, ctx: &SessionContext) -> DriverResult<String> {
        debug!(session = ctx.id, "greeting session");
        Ok(GREETING.to_owned())
    }

    fn user_left(&self, ctx: &SessionContext) {
        info!(session = ctx.id, "session ended");
    }

    async fn authenticate(
        &self,
        ctx: &SessionContext,
        username: &str,
        password: &str,
    ) -> DriverResult<Box<dyn SessionFilesystem>> {
        if self.credentials.matches(username, password) {
            info!(session = ctx.id, username, bucket = %self.bucket, "login accepted");
            Ok(Box::new(S3SessionFs::new(
                self.store.clone(),
                self.bucket.clone(),
            )))
        } else {
            warn!(session = ctx.id, username, "login rejected");
            Err(DriverError::Authentication)
        }
    }

    fn tls_config(&self) -> DriverResult<TlsConfig> {
        // The driver carries no key material; do not change this to a
        // silent fallback.
        warn!("TLS requested but not supported");
        Err(DriverError::EncryptionUnsupported)
    }
}
