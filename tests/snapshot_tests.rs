// Integration tests for the snapshot runner
//
// The committed .out files under tests/snapshots must match the programs,
// and the runner must create, detect and refresh snapshots in a scratch
// directory.

use flowdemo::console::Console;
use flowdemo::errors::ErrorKind;
use flowdemo::programs::Program;
use flowdemo::snapshot::{run_snapshots, snapshot_path};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

#[test]
fn test_committed_snapshots_match() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("snapshots");
    let report = run_snapshots(&dir, false).unwrap();
    for result in &report.results {
        assert_eq!(result.expected, result.actual, "{}", result.name);
    }
    assert_eq!(report.total, 4);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_missing_snapshots_are_written() {
    let tmp = tempfile::tempdir().unwrap();
    let report = run_snapshots(tmp.path(), false).unwrap();
    assert_eq!(report.failed, 0);

    let written = fs::read_to_string(snapshot_path(tmp.path(), Program::Switch)).unwrap();
    assert_eq!(written, "Program start\nExecuting case 2\nAfter switch block\nProgram end\n");
}

#[test]
fn test_mismatch_fails_then_update_repairs() {
    let tmp = tempfile::tempdir().unwrap();
    let path = snapshot_path(tmp.path(), Program::Fallthrough);
    fs::write(&path, "Excellent\n").unwrap();

    let report = run_snapshots(tmp.path(), false).unwrap();
    assert_eq!(report.failed, 1);
    assert_eq!(report.exit_code(), 1);
    let failed = report.results.iter().find(|r| !r.passed).unwrap();
    assert_eq!(failed.name, "fallthrough");
    assert_eq!(failed.expected, "Excellent");

    let report = run_snapshots(tmp.path(), true).unwrap();
    assert_eq!(report.failed, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "Excellent\nGood or Excellent\n");
}

#[test]
fn test_nested_directory_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("a").join("b");
    let report = run_snapshots(&dir, false).unwrap();
    assert_eq!(report.passed, 4);
    assert!(snapshot_path(&dir, Program::Loops).exists());
}

#[test]
fn test_report_is_written_through_console() {
    let tmp = tempfile::tempdir().unwrap();
    let report = run_snapshots(tmp.path(), false).unwrap();

    let (mut console, buffer) = Console::captured();
    report.print(&mut console).unwrap();
    let lines = Console::captured_lines(&buffer).unwrap();
    assert!(lines.iter().any(|l| l.contains("do-while")));
    assert!(lines.iter().any(|l| l.contains("Snapshots: 4 total")));
}

#[test]
fn test_report_write_failure_is_an_output_error() {
    let tmp = tempfile::tempdir().unwrap();
    let report = run_snapshots(tmp.path(), false).unwrap();

    let (mut console, buffer) = Console::captured();
    let poisoner = buffer.clone();
    let _ = std::thread::spawn(move || {
        let _guard = poisoner.lock().unwrap();
        panic!("poison the capture buffer");
    })
    .join();

    let err = report.print(&mut console).unwrap_err();
    assert_eq!(err.kind, ErrorKind::OutputError);
}
