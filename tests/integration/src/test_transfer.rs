//! Upload flow: buffering, commit on close, failure handling.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use bytes::Bytes;

    use bucketftp_driver::{
        DriverError, FileHandle, OpenMode, ServerDriver, SessionContext, SessionFilesystem,
    };
    use bucketftp_store::{
        InMemoryObjectStore, ObjectEntry, ObjectStore, StoreError, StoreResult,
    };

    use crate::{TEST_BUCKET, TEST_PASS, TEST_USER, fixed_stamp, seeded_store, test_driver};

    /// Store double whose PUT always fails; listings delegate to the
    /// wrapped in-memory store.
    struct FailingPutStore {
        inner: Arc<InMemoryObjectStore>,
    }

    #[async_trait]
    impl ObjectStore for FailingPutStore {
        async fn list_objects(&self, bucket: &str) -> StoreResult<Vec<ObjectEntry>> {
            self.inner.list_objects(bucket).await
        }

        async fn put_object(&self, bucket: &str, key: &str, _body: Bytes) -> StoreResult<()> {
            Err(StoreError::Put {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                source: anyhow::anyhow!("injected failure"),
            })
        }
    }

    #[tokio::test]
    async fn test_should_commit_writes_as_single_object() {
        let store = seeded_store(&[]);
        let driver = test_driver(store.clone());
        let mut fs = driver
            .authenticate(&SessionContext::new(1), TEST_USER, TEST_PASS)
            .await
            .expect("authenticate");

        let mut handle = fs.open_file("x.txt", OpenMode::Write).await.expect("open");
        for chunk in [&b"ab"[..], b"cd", b"ef"] {
            let written = handle.write(chunk).await.expect("write");
            assert_eq!(written, chunk.len());
        }
        handle.close().await.expect("close");

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.object(TEST_BUCKET, "x.txt"),
            Some(Bytes::from_static(b"abcdef"))
        );
    }

    #[tokio::test]
    async fn test_should_overwrite_existing_object_on_commit() {
        let store = seeded_store(&[("x.txt", b"old")]);
        let driver = test_driver(store.clone());
        let mut fs = driver
            .authenticate(&SessionContext::new(1), TEST_USER, TEST_PASS)
            .await
            .expect("authenticate");

        let mut handle = fs.open_file("x.txt", OpenMode::Write).await.expect("open");
        handle.write(b"replacement").await.expect("write");
        handle.close().await.expect("close");

        assert_eq!(
            store.object(TEST_BUCKET, "x.txt"),
            Some(Bytes::from_static(b"replacement"))
        );
    }

    #[tokio::test]
    async fn test_should_refuse_read_open() {
        let store = seeded_store(&[("x.txt", b"contents")]);
        let driver = test_driver(store.clone());
        let mut fs = driver
            .authenticate(&SessionContext::new(1), TEST_USER, TEST_PASS)
            .await
            .expect("authenticate");

        assert!(matches!(
            fs.open_file("x.txt", OpenMode::Read).await,
            Err(DriverError::UnsupportedOperation {
                operation: "open for read"
            })
        ));

        assert_eq!(
            store.object(TEST_BUCKET, "x.txt"),
            Some(Bytes::from_static(b"contents"))
        );
    }

    #[tokio::test]
    async fn test_should_preserve_prior_object_when_commit_fails() {
        let inner = Arc::new(InMemoryObjectStore::new());
        inner.insert_object(
            TEST_BUCKET,
            "x.txt",
            Bytes::from_static(b"old"),
            fixed_stamp(),
        );
        let failing = Arc::new(FailingPutStore {
            inner: inner.clone(),
        });

        let config = crate::test_config();
        let driver = bucketftp_driver::S3Driver::from_config(&config, failing);
        let mut fs = driver
            .authenticate(&SessionContext::new(1), TEST_USER, TEST_PASS)
            .await
            .expect("authenticate");

        let mut handle = fs.open_file("x.txt", OpenMode::Write).await.expect("open");
        handle.write(b"replacement").await.expect("write");

        let result = handle.close().await;
        assert!(matches!(result, Err(DriverError::Backend(_))));

        assert_eq!(
            inner.object(TEST_BUCKET, "x.txt"),
            Some(Bytes::from_static(b"old"))
        );
    }
}
