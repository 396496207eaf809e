//! Driver-level error types.

use bucketftp_store::StoreError;

/// Error returned from a driver or filesystem operation.
///
/// Every rejected or failed operation surfaces one of these to the
/// immediate caller. Nothing here is fatal to the process and nothing is
/// retried; the protocol engine translates the error into its wire reply.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The presented login pair does not match the configured identity.
    #[error("invalid username or password")]
    Authentication,

    /// TLS material was requested but the driver carries none.
    #[error("encrypted connections are not supported")]
    EncryptionUnsupported,

    /// The operation is outside the backend's capability set.
    #[error("operation not supported: {operation}")]
    UnsupportedOperation {
        /// The refused operation, for the engine's reply text.
        operation: &'static str,
    },

    /// The operation is within the capability set but disabled by policy.
    #[error("permission denied: {operation}")]
    PermissionDenied {
        /// The refused operation, for the engine's reply text.
        operation: &'static str,
    },

    /// Pre-allocating upload space was refused.
    #[error("storage allocation is not supported")]
    AllocationDenied,

    /// The backing object store failed.
    #[error(transparent)]
    Backend(#[from] StoreError),
}

/// Convenience result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;
