/*!
 * Job List Loader Tests
 * File reading, comment handling and fatal parse errors
 */

use pretty_assertions::assert_eq;
use prio_sched_sim::{load_job_file, simulate_file, JobSpec, ParseError, SimConfig, SimError};
use std::io::Write;
use tempfile::NamedTempFile;

fn job_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_valid_file() {
    let file = job_file("# jobs\nshell 2 0 30 6\neditor 4 5 12 40\n");
    let jobs = load_job_file(file.path()).unwrap();

    assert_eq!(
        jobs,
        vec![
            JobSpec::new("shell", 2, 0, 30, 6),
            JobSpec::new("editor", 4, 5, 12, 40),
        ]
    );
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    match load_job_file(&path) {
        Err(SimError::FileNotFound { path: reported }) => {
            assert!(reported.ends_with("absent.txt"));
        }
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_job_file(dir.path()).unwrap_err();
    assert!(matches!(err, SimError::Unreadable { .. }));
}

#[test]
fn test_bad_line_aborts_load() {
    let file = job_file("A 1 0 10 4\nB 1 zero 10 4\n");
    let err = load_job_file(file.path()).unwrap_err();

    match err {
        SimError::Parse(ParseError::InvalidInteger { line, field, value }) => {
            assert_eq!(line, 2);
            assert_eq!(field, "arrival");
            assert_eq!(value, "zero");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_duplicate_names_rejected() {
    let file = job_file("A 1 0 10 4\nA 2 0 10 4\n");
    let err = load_job_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        SimError::Parse(ParseError::DuplicateName { line: 2, .. })
    ));
}

#[test]
fn test_comment_only_file_cannot_be_simulated() {
    let file = job_file("# nothing here\n");
    assert_eq!(load_job_file(file.path()).unwrap(), Vec::new());

    let err = simulate_file(file.path(), SimConfig::new(10, 20).unwrap()).unwrap_err();
    assert!(matches!(err, SimError::EmptyJobList));
}

#[test]
fn test_simulate_file_end_to_end() {
    let file = job_file("A 1 0 5 100\n");
    let report = simulate_file(file.path(), SimConfig::new(10, 20).unwrap()).unwrap();
    assert_eq!(report.completions.len(), 1);
    assert_eq!(report.average_turnaround, 5.0);
}
