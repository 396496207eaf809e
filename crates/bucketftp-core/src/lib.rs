//! Core types and configuration for bucketftp.
//!
//! This crate provides the foundational building blocks shared across the
//! bucketftp workspace: environment-driven configuration, the fixed login
//! credential pair, and the synthetic file-mode bits that object-storage
//! listings report.

mod config;
mod error;
mod types;

pub use config::BucketFtpConfig;
pub use error::{BucketFtpError, BucketFtpResult};
pub use types::{Credentials, FileMode};
