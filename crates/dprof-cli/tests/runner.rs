//! Integration tests for path resolution and batch profiling.

use std::fs;

use dprof_cli::runner::{ANALYSIS_DIR, RunError, run};
use dprof_cli::types::FileStatus;
use dprof_model::ProfileOptions;
use tempfile::TempDir;

const AGE_CITY: &str = "age,city\n20,NY\n30,NY\n40,LA\n,LA\n";

#[test]
fn test_single_file_writes_named_report() {
    let dir = TempDir::new().expect("tempdir");
    let input = dir.path().join("train.csv");
    fs::write(&input, AGE_CITY).expect("write csv");

    let report = run(&input, Some("age"), &ProfileOptions::default()).expect("run");

    let expected = dir.path().join(ANALYSIS_DIR).join("analysis_train_v2.xlsx");
    assert!(expected.is_file());
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].output, expected);
    assert_eq!(report.predictor.as_deref(), Some("age"));
    assert!(!report.has_errors());
    match &report.files[0].status {
        FileStatus::Written(outcome) => {
            assert_eq!(outcome.rows, 4);
            assert_eq!(outcome.columns, 2);
        }
        FileStatus::Failed(message) => panic!("unexpected failure: {message}"),
    }
}

#[test]
fn test_directory_profiles_only_csv_files() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("a.csv"), AGE_CITY).expect("write a");
    fs::write(dir.path().join("b.csv"), "x\n1\n2\n").expect("write b");
    fs::write(dir.path().join("notes.txt"), "not a table").expect("write txt");
    fs::write(dir.path().join("upper.CSV"), AGE_CITY).expect("write upper");

    let report = run(dir.path(), None, &ProfileOptions::default()).expect("run");

    assert_eq!(report.written_count(), 2);
    let analysis = dir.path().join(ANALYSIS_DIR);
    let mut written: Vec<String> = fs::read_dir(&analysis)
        .expect("read analysis")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    written.sort();
    assert_eq!(written, vec!["analysis_a_v2.xlsx", "analysis_b_v2.xlsx"]);
}

#[test]
fn test_rerun_with_existing_analysis_dir() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("a.csv"), AGE_CITY).expect("write a");

    let first = run(dir.path(), None, &ProfileOptions::default()).expect("first run");
    let notes = dir.path().join(ANALYSIS_DIR).join("notes.txt");
    fs::write(&notes, "keep me").expect("write notes");
    let second = run(dir.path(), None, &ProfileOptions::default()).expect("second run");

    assert_eq!(first.written_count(), 1);
    assert_eq!(second.written_count(), 1);
    assert_eq!(first.files[0].output, second.files[0].output);
    assert_eq!(fs::read_to_string(&notes).expect("read notes"), "keep me");
}

#[test]
fn test_invalid_path_creates_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("missing");

    let err = run(&missing, None, &ProfileOptions::default()).unwrap_err();

    assert!(matches!(err, RunError::InvalidPath { .. }));
    assert!(!missing.join(ANALYSIS_DIR).exists());
    assert!(!dir.path().join(ANALYSIS_DIR).exists());
}

#[test]
fn test_failing_file_does_not_stop_batch() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("a_empty.csv"), "").expect("write empty");
    fs::write(dir.path().join("b.csv"), AGE_CITY).expect("write b");

    let report = run(dir.path(), None, &ProfileOptions::default()).expect("run");

    assert_eq!(report.files.len(), 2);
    assert!(matches!(report.files[0].status, FileStatus::Failed(_)));
    assert!(report.files[1].is_written());
    assert!(report.has_errors());
    assert!(!report.files[0].output.exists());
}
