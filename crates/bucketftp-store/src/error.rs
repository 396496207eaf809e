//! Storage-backend error types.

/// Error produced by an [`crate::ObjectStore`] call.
///
/// Both variants wrap the underlying client failure; the driver layer
/// propagates them verbatim without retrying.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A bucket listing request failed.
    #[error("listing bucket {bucket} failed: {source}")]
    List {
        /// The bucket that was being listed.
        bucket: String,
        /// The underlying client failure.
        #[source]
        source: anyhow::Error,
    },

    /// An object upload failed. The key's prior state is unchanged.
    #[error("uploading s3://{bucket}/{key} failed: {source}")]
    Put {
        /// The target bucket.
        bucket: String,
        /// The target key.
        key: String,
        /// The underlying client failure.
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
