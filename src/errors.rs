// File: src/errors.rs
//
// Error handling and reporting for flowdemo.
// Provides a structured error type with optional help/suggestion/note
// sections and a pretty-printed, colored message.

use colored::Colorize;
use std::fmt;

/// Types of errors that can occur while running the sample programs
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    OutputError,
    UnknownProgram,
    SnapshotError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::OutputError => write!(f, "Output Error"),
            ErrorKind::UnknownProgram => write!(f, "Unknown Program"),
            ErrorKind::SnapshotError => write!(f, "Snapshot Error"),
        }
    }
}

/// A structured error with optional context sections
#[derive(Debug, Clone)]
pub struct FlowError {
    pub kind: ErrorKind,
    pub message: String,
    pub suggestion: Option<String>,
    pub help: Option<String>,
    pub note: Option<String>,
}

impl FlowError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message, suggestion: None, help: None, note: None }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    pub fn with_help(mut self, help: String) -> Self {
        self.help = Some(help);
        self
    }

    pub fn with_note(mut self, note: String) -> Self {
        self.note = Some(note);
        self
    }

    /// Create an output error from a failed write
    pub fn output_error(message: String) -> Self {
        Self::new(ErrorKind::OutputError, message)
    }

    /// Create a snapshot error
    pub fn snapshot_error(message: String) -> Self {
        Self::new(ErrorKind::SnapshotError, message)
    }

    /// Create an unknown program error, suggesting the closest known name
    pub fn unknown_program(name: &str, known: &[String]) -> Self {
        let mut err = Self::new(ErrorKind::UnknownProgram, format!("No program named '{}'", name))
            .with_help(format!("available programs: {}", known.join(", ")));
        if let Some(closest) = find_closest_match(name, known) {
            err = err.with_suggestion(closest.to_string());
        }
        err
    }
}

impl fmt::Display for FlowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind_str = format!("{}", self.kind);
        writeln!(f, "{}: {}", kind_str.red().bold(), self.message.bold())?;

        if let Some(ref help) = self.help {
            writeln!(
                f,
                "   {} {}",
                "=".bright_yellow(),
                format!("help: {}", help).bright_yellow()
            )?;
        }

        if let Some(ref suggestion) = self.suggestion {
            writeln!(
                f,
                "   {} {}",
                "=".bright_green(),
                format!("Did you mean '{}'?", suggestion).bright_green()
            )?;
        }

        if let Some(ref note) = self.note {
            writeln!(f, "   {} {}", "=".bright_cyan(), format!("note: {}", note).bright_cyan())?;
        }

        Ok(())
    }
}

impl std::error::Error for FlowError {}

/// Computes the Levenshtein distance between two strings
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Single rolling row; prev[j] holds the distance for a[..i-1] vs b[..j]
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Find the closest candidate within distance 3, preferring the smallest distance
pub fn find_closest_match<'a>(target: &str, candidates: &'a [String]) -> Option<&'a str> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in candidates {
        let distance = levenshtein_distance(target, candidate);
        if distance <= 3 && distance < best_distance {
            best_distance = distance;
            best_match = Some(candidate.as_str());
        }
    }

    best_match
}
