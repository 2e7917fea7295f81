#[cfg(test)]
mod tests {
    use promptdash::app::file_intake::{decode_text, read_batch, FileIntake, FileSource};
    use promptdash::app::prompt::AttachedFile;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("failed to build test runtime")
            .block_on(future)
    }

    fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).expect("failed to write fixture");
        path
    }

    #[test]
    fn test_batch_reads_all_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![
            FileSource::Path(write_fixture(&dir, "one.txt", "first")),
            FileSource::Path(write_fixture(&dir, "two.txt", "second")),
            FileSource::Path(write_fixture(&dir, "three.txt", "third")),
        ];

        let files = block_on(read_batch(sources));

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["one.txt", "two.txt", "three.txt"]);
        assert_eq!(files[1].content, "second");
    }

    #[test]
    fn test_failed_reads_are_dropped_without_aborting_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![
            FileSource::Path(write_fixture(&dir, "good1.txt", "ok")),
            FileSource::Path(dir.path().join("missing.txt")),
            FileSource::Path(write_fixture(&dir, "good2.txt", "also ok")),
        ];

        let files = block_on(read_batch(sources));

        // Three attempted, one failed: exactly two survive, in drop order.
        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["good1.txt", "good2.txt"]);
    }

    #[test]
    fn test_mixed_sources_keep_drop_order() {
        // A drop mixing path-backed and in-memory files stays one batch,
        // with the inline entry in its original position.
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![
            FileSource::Path(write_fixture(&dir, "before.txt", "B")),
            FileSource::Inline(AttachedFile::new("middle.txt", "M")),
            FileSource::Path(write_fixture(&dir, "after.txt", "A")),
        ];

        let files = block_on(read_batch(sources));

        let names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["before.txt", "middle.txt", "after.txt"]);
        assert_eq!(files[1].content, "M");
    }

    #[test]
    fn test_empty_batch() {
        let files = block_on(read_batch(Vec::new()));
        assert!(files.is_empty());
    }

    #[test]
    fn test_binary_content_is_accepted_garbled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, b'h', b'i']).unwrap();

        let files = block_on(read_batch(vec![FileSource::Path(path)]));

        assert_eq!(files.len(), 1);
        assert!(files[0].content.contains('\u{fffd}'));
        assert!(files[0].content.contains("hi"));
    }

    #[test]
    fn test_decode_text_lossy() {
        let file = decode_text("raw", &[0xC3, 0x28]);
        assert_eq!(file.name, "raw");
        assert!(file.content.contains('\u{fffd}'));
    }

    #[test]
    fn test_intake_polling_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let sources = vec![
            FileSource::Path(write_fixture(&dir, "a.txt", "A")),
            FileSource::Path(dir.path().join("nope.txt")),
            FileSource::Path(write_fixture(&dir, "b.txt", "B")),
        ];

        let mut intake = FileIntake::new();
        intake.start_batch(sources);
        assert!(intake.is_reading());

        let deadline = Instant::now() + Duration::from_secs(10);
        let mut batches = Vec::new();
        while batches.is_empty() && Instant::now() < deadline {
            batches.extend(intake.poll());
            std::thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(batches.len(), 1);
        assert!(!intake.is_reading());
        let batch = &batches[0];
        assert_eq!(batch.attempted, 3);
        let names: Vec<&str> = batch.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_empty_batch_is_not_started() {
        let mut intake = FileIntake::new();
        intake.start_batch(Vec::new());
        assert!(!intake.is_reading());
        assert!(intake.poll().is_empty());
    }
}
