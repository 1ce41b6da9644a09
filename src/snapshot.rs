// File: src/snapshot.rs
//
// Golden-output checks for the sample programs.
//
// Every program in the catalogue is run into a capture buffer and compared
// against `<dir>/<name>.out`. A missing file, or running with `update`,
// writes the actual output as the new expectation.

use crate::console::Console;
use crate::errors::FlowError;
use crate::programs::Program;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Outcome of checking one program
#[derive(Clone, Debug)]
pub struct SnapshotResult {
    pub name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    pub duration_ms: u128,
}

/// Summary of a snapshot run
#[derive(Debug)]
pub struct SnapshotReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<SnapshotResult>,
}

pub fn snapshot_path(dir: &Path, program: Program) -> PathBuf {
    dir.join(format!("{}.out", program.name()))
}

/// Checks every catalogued program against its snapshot in `dir`
pub fn run_snapshots(dir: &Path, update: bool) -> Result<SnapshotReport, FlowError> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "snapshot directory does not exist, creating it");
        fs::create_dir_all(dir).map_err(|e| {
            FlowError::snapshot_error(format!("cannot create snapshot directory: {}", e))
                .with_note(dir.display().to_string())
        })?;
    }

    let mut results = Vec::new();
    for program in Program::all() {
        results.push(check_program(dir, program, update)?);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    let report = SnapshotReport { total: results.len(), passed, failed: results.len() - passed, results };
    tracing::info!(total = report.total, passed = report.passed, failed = report.failed, "snapshot run finished");
    Ok(report)
}

fn check_program(dir: &Path, program: Program, update: bool) -> Result<SnapshotResult, FlowError> {
    let start = Instant::now();
    let expected_path = snapshot_path(dir, program);

    let actual = program.capture()?.join("\n");

    let expected = if expected_path.exists() && !update {
        fs::read_to_string(&expected_path)
            .map_err(|e| {
                FlowError::snapshot_error(format!("cannot read snapshot: {}", e))
                    .with_note(expected_path.display().to_string())
            })?
            .trim()
            .to_string()
    } else {
        fs::write(&expected_path, format!("{}\n", actual)).map_err(|e| {
            FlowError::snapshot_error(format!("cannot write snapshot: {}", e))
                .with_note(expected_path.display().to_string())
        })?;
        if update {
            tracing::info!(path = %expected_path.display(), "updated snapshot");
        } else {
            tracing::warn!(path = %expected_path.display(), "no snapshot found, recorded current output");
        }
        actual.clone()
    };

    let passed = actual == expected;
    if !passed {
        tracing::warn!(program = program.name(), "output differs from snapshot");
    }

    Ok(SnapshotResult {
        name: program.name().to_string(),
        passed,
        expected,
        actual,
        duration_ms: start.elapsed().as_millis(),
    })
}

impl SnapshotReport {
    /// Write the report with colored output
    pub fn print(&self, console: &mut Console) -> Result<(), FlowError> {
        for result in &self.results {
            if result.passed {
                console.write_line(&format!(
                    "[{}] {} ({}ms)",
                    "✓".green().bold(),
                    result.name.green(),
                    result.duration_ms
                ))?;
            } else {
                console.write_line(&format!("[{}] {}", "✗".red().bold(), result.name.red()))?;
                console.write_line(&format!(
                    "{}\n{}\n{}\n{}\n",
                    "Expected:".bold(),
                    result.expected,
                    "Got:".bold(),
                    result.actual
                ))?;
            }
        }

        console.write_line(&format!(
            "\nSnapshots: {} total, {} passed, {} failed",
            self.total,
            self.passed.to_string().green().bold(),
            self.failed.to_string().red().bold()
        ))
    }

    /// 0 when every snapshot matched, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 {
            0
        } else {
            1
        }
    }
}
