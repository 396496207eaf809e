//! Object-storage client seam for bucketftp.
//!
//! The driver layer never talks to a storage SDK directly; it holds an
//! `Arc<dyn ObjectStore>` and issues whole-bucket listings and whole-object
//! PUTs through it. This crate defines that seam ([`ObjectStore`]) together
//! with two fulfillers:
//!
//! - [`S3ObjectStore`] — backed by the AWS SDK, constructed with explicitly
//!   injected credentials rather than an ambient credential chain.
//! - [`InMemoryObjectStore`] — a thread-safe map for tests and local
//!   development.

mod error;
mod memory;
mod s3;
mod store;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryObjectStore;
pub use s3::{S3ObjectStore, S3StoreConfig};
pub use store::{ObjectEntry, ObjectStore};
