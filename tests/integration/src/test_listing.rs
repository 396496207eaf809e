//! Listing projection over seeded bucket contents.

#[cfg(test)]
mod tests {
    use bucketftp_core::FileMode;
    use bucketftp_driver::{
        FileHandle, FileInfo, OpenMode, ServerDriver, SessionContext, SessionFilesystem,
    };

    use crate::{TEST_PASS, TEST_USER, seeded_store, test_driver};

    #[tokio::test]
    async fn test_should_list_empty_bucket_as_no_entries() {
        let driver = test_driver(seeded_store(&[]));
        let mut fs = driver
            .authenticate(&SessionContext::new(1), TEST_USER, TEST_PASS)
            .await
            .expect("authenticate");

        let listed = fs.list_files().await.expect("list");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_should_project_every_seeded_object() {
        let store = seeded_store(&[
            ("a.txt", b"aaa"),
            ("docs/report.txt", b"report body"),
            ("c.bin", b"\x00\x01\x02\x03"),
        ]);
        let driver = test_driver(store);
        let mut fs = driver
            .authenticate(&SessionContext::new(1), TEST_USER, TEST_PASS)
            .await
            .expect("authenticate");

        let listed = fs.list_files().await.expect("list");
        assert_eq!(listed.len(), 3);

        let mut names: Vec<&str> = listed.iter().map(|info| info.name()).collect();
        names.sort_unstable();
        assert_eq!(names, ["a.txt", "c.bin", "docs/report.txt"]);

        for info in &listed {
            assert_eq!(info.mode(), FileMode::READ_ONLY);
            assert!(!info.is_dir());
            assert_eq!(info.modified(), crate::fixed_stamp());
            let expected = match info.name() {
                "a.txt" => 3,
                "docs/report.txt" => 11,
                "c.bin" => 4,
                other => panic!("unexpected entry: {other}"),
            };
            assert_eq!(info.size(), expected);
        }
    }

    #[tokio::test]
    async fn test_should_show_committed_upload_in_next_listing() {
        let driver = test_driver(seeded_store(&[("existing.txt", b"x")]));
        let mut fs = driver
            .authenticate(&SessionContext::new(1), TEST_USER, TEST_PASS)
            .await
            .expect("authenticate");

        let mut handle = fs
            .open_file("fresh.txt", OpenMode::Write)
            .await
            .expect("open");
        handle.write(b"fresh body").await.expect("write");

        // Uncommitted bytes must stay invisible.
        let before = fs.list_files().await.expect("list");
        assert_eq!(before.len(), 1);

        handle.close().await.expect("close");

        let after = fs.list_files().await.expect("list");
        let mut names: Vec<&str> = after.iter().map(|info| info.name()).collect();
        names.sort_unstable();
        assert_eq!(names, ["existing.txt", "fresh.txt"]);
    }
}
