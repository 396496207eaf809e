//! Adapter layer exposing an object-storage bucket to a file-transfer
//! protocol engine.
//!
//! The engine drives its backend through the capability traits in this
//! crate ([`ServerDriver`], [`SessionFilesystem`], [`FileHandle`],
//! [`FileInfo`]); the S3 fulfillers ([`S3Driver`], [`S3SessionFs`],
//! [`PendingUpload`], [`ObjectMetadata`]) map that fixed operation set
//! onto a flat, immutable key namespace. Uploads buffer in memory and
//! commit as one whole-object PUT on close; every other mutation is
//! refused with a typed [`DriverError`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use bucketftp_core::Credentials;
//! use bucketftp_driver::{
//!     FileHandle, OpenMode, S3Driver, ServerDriver, ServerSettings, SessionContext,
//!     SessionFilesystem,
//! };
//! use bucketftp_store::InMemoryObjectStore;
//!
//! tokio_test::block_on(async {
//!     let store = Arc::new(InMemoryObjectStore::new());
//!     let driver = S3Driver::new(
//!         ServerSettings {
//!             listen_host: "localhost".to_owned(),
//!             listen_port: 2121,
//!             max_sessions: 100,
//!         },
//!         Credentials::new("ftpuser", "hunter2"),
//!         store.clone(),
//!         "my-bucket",
//!     );
//!
//!     let ctx = SessionContext::new(1);
//!     let mut fs = driver
//!         .authenticate(&ctx, "ftpuser", "hunter2")
//!         .await
//!         .unwrap();
//!
//!     let mut file = fs.open_file("hello.txt", OpenMode::Write).await.unwrap();
//!     file.write(b"hello").await.unwrap();
//!     file.close().await.unwrap();
//!
//!     assert_eq!(store.len(), 1);
//! });
//! ```

mod capability;
mod error;
mod metadata;
mod server;
mod session;
mod upload;

pub use capability::{
    FileHandle, FileInfo, OpenMode, ServerDriver, ServerSettings, SessionContext,
    SessionFilesystem, TlsConfig,
};
pub use error::{DriverError, DriverResult};
pub use metadata::ObjectMetadata;
pub use server::S3Driver;
pub use session::S3SessionFs;
pub use upload::PendingUpload;
