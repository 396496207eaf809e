//! Error types for the bucketftp core.

/// Core error type for bucketftp infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum BucketFtpError {
    /// A required environment variable is not set.
    #[error("required environment variable {var} is not set")]
    MissingEnv {
        /// Name of the missing variable.
        var: &'static str,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnv {
        /// Name of the offending variable.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for bucketftp operations.
pub type BucketFtpResult<T> = Result<T, BucketFtpError>;
