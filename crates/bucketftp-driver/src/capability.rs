//! The capability traits a protocol engine requires of its backend.
//!
//! A file-transfer-protocol engine drives its filesystem through a fixed
//! operation set: a server-level authenticator plus a per-session
//! filesystem with open file handles and listing metadata. These traits
//! model that set as object-safe async traits so the engine can hold
//! `Box<dyn SessionFilesystem>` and `Box<dyn FileHandle>` without knowing
//! the backing implementation.

use std::io::SeekFrom;
use std::net::SocketAddr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use bucketftp_core::{BucketFtpConfig, FileMode};

use crate::error::DriverResult;

// ---------------------------------------------------------------------------
// Supporting values
// ---------------------------------------------------------------------------

/// Listen configuration handed to the protocol engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Host the engine should bind.
    pub listen_host: String,
    /// Port the engine should bind.
    pub listen_port: u16,
    /// Maximum number of concurrent sessions the engine should accept.
    pub max_sessions: usize,
}

impl From<&BucketFtpConfig> for ServerSettings {
    fn from(config: &BucketFtpConfig) -> Self {
        Self {
            listen_host: config.listen_host.clone(),
            listen_port: config.listen_port,
            max_sessions: config.max_sessions,
        }
    }
}

/// Identity of one engine-managed session, passed into driver callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Engine-assigned session id.
    pub id: u64,
    /// Peer address, when the engine knows it.
    pub remote_addr: Option<SocketAddr>,
}

impl SessionContext {
    /// Create a context for session `id` with no known peer address.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            remote_addr: None,
        }
    }

    /// Attach the peer address.
    #[must_use]
    pub fn with_remote_addr(mut self, addr: SocketAddr) -> Self {
        self.remote_addr = Some(addr);
        self
    }
}

/// Requested access mode for [`SessionFilesystem::open_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Open for reading.
    Read,
    /// Open for writing; the handle starts empty.
    Write,
}

/// TLS material a driver may hand to the engine.
///
/// Defined so the capability surface is complete; a driver that does not
/// support encryption fails the request instead of producing one.
#[derive(Clone)]
pub struct TlsConfig {
    /// PEM-encoded certificate chain.
    pub cert_chain_pem: String,
    /// PEM-encoded private key.
    pub private_key_pem: String,
}

impl std::fmt::Debug for TlsConfig {
    // The private key must never reach log output.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TlsConfig")
            .field("cert_chain_pem", &self.cert_chain_pem)
            .field("private_key_pem", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ServerDriver
// ---------------------------------------------------------------------------

/// Server-level hooks: settings, greeting, login gate, TLS.
///
/// One driver serves every session; implementations must be `Send + Sync`
/// so the engine can share them across connection tasks.
#[async_trait]
pub trait ServerDriver: Send + Sync {
    /// The listen configuration the engine should use.
    fn settings(&self) -> ServerSettings;

    /// Greeting line sent when a session connects.
    ///
    /// # Errors
    ///
    /// Implementations may refuse a session here; the provided drivers
    /// never do.
    fn welcome(&self, ctx: &SessionContext) -> DriverResult<String>;

    /// Notification that a session has ended. Purely informational.
    fn user_left(&self, ctx: &SessionContext);

    /// Check a login pair and, on success, create the session filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::Authentication`] when the pair does
    /// not match; no filesystem is created in that case.
    async fn authenticate(
        &self,
        ctx: &SessionContext,
        username: &str,
        password: &str,
    ) -> DriverResult<Box<dyn SessionFilesystem>>;

    /// TLS material for upgrading the session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::EncryptionUnsupported`] when the
    /// driver carries no TLS material.
    fn tls_config(&self) -> DriverResult<TlsConfig>;
}

// ---------------------------------------------------------------------------
// SessionFilesystem
// ---------------------------------------------------------------------------

/// The filesystem operation set behind one authenticated session.
///
/// The engine sequences commands within a session, so methods take
/// `&mut self` and implementations need no internal locking for
/// per-session state.
#[async_trait]
pub trait SessionFilesystem: Send {
    /// Change the session's working directory.
    ///
    /// # Errors
    ///
    /// Backends without directory semantics may accept and ignore this.
    async fn change_directory(&mut self, path: &str) -> DriverResult<()>;

    /// Create a directory.
    ///
    /// # Errors
    ///
    /// Backends without directory semantics may accept and ignore this.
    async fn make_directory(&mut self, path: &str) -> DriverResult<()>;

    /// List the files visible to this session.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::Backend`] when the backing store
    /// fails; no entries are fabricated.
    async fn list_files(&mut self) -> DriverResult<Vec<Box<dyn FileInfo>>>;

    /// Open `path` with the requested mode.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::UnsupportedOperation`] when the
    /// backend cannot honor `mode`.
    async fn open_file(&mut self, path: &str, mode: OpenMode) -> DriverResult<Box<dyn FileHandle>>;

    /// Delete `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::PermissionDenied`] when deletion is
    /// disabled by policy.
    async fn delete_file(&mut self, path: &str) -> DriverResult<()>;

    /// Metadata for a single path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::UnsupportedOperation`] when the
    /// backend exposes metadata only through bulk listing.
    async fn stat_file(&mut self, path: &str) -> DriverResult<Box<dyn FileInfo>>;

    /// Rename `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::PermissionDenied`] when renaming is
    /// disabled by policy.
    async fn rename_file(&mut self, from: &str, to: &str) -> DriverResult<()>;

    /// Whether `size` bytes can be pre-allocated for an upload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::AllocationDenied`] when the backend
    /// cannot reserve space ahead of a write.
    async fn can_allocate(&mut self, size: u64) -> DriverResult<bool>;

    /// Change the permission bits of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::PermissionDenied`] when permission
    /// bits are synthetic and cannot be changed.
    async fn chmod_file(&mut self, path: &str, mode: FileMode) -> DriverResult<()>;
}

// ---------------------------------------------------------------------------
// FileHandle
// ---------------------------------------------------------------------------

/// An open file within a session.
///
/// `close` takes the handle by value, so a handle is closed exactly once
/// and cannot be used afterwards. Dropping a handle without closing it
/// abandons its contents.
#[async_trait]
pub trait FileHandle: Send {
    /// Append `buf` to the handle's contents.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::Backend`] when the write cannot be
    /// accepted.
    async fn write(&mut self, buf: &[u8]) -> DriverResult<usize>;

    /// Read into `buf` from the current position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::UnsupportedOperation`] on write-only
    /// handles.
    async fn read(&mut self, buf: &mut [u8]) -> DriverResult<usize>;

    /// Reposition the handle.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::UnsupportedOperation`] on handles
    /// that only append.
    async fn seek(&mut self, pos: SeekFrom) -> DriverResult<u64>;

    /// Commit the handle's contents and consume it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DriverError::Backend`] when the commit fails; the
    /// backend's prior state is unchanged in that case.
    async fn close(self: Box<Self>) -> DriverResult<()>;
}

// ---------------------------------------------------------------------------
// FileInfo
// ---------------------------------------------------------------------------

/// Metadata for one listed file.
pub trait FileInfo: Send + Sync + std::fmt::Debug {
    /// File name as the engine should render it.
    fn name(&self) -> &str;

    /// Size in bytes.
    fn size(&self) -> u64;

    /// Permission bits.
    fn mode(&self) -> FileMode;

    /// Last-modified timestamp.
    fn modified(&self) -> DateTime<Utc>;

    /// Whether the entry is a directory.
    fn is_dir(&self) -> bool;
}
