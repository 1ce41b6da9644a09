// File: src/console.rs
//
// Line-oriented output sink shared by every sample program.
// Writes go to stdout unless a capture buffer has been installed,
// which is how the snapshot runner and the tests observe output.

use crate::errors::FlowError;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Destination for program output, one line per call, in call order
#[derive(Default)]
pub struct Console {
    output: Option<Arc<Mutex<Vec<u8>>>>,
}

impl Console {
    /// Creates a console that writes to stdout
    pub fn new() -> Self {
        Console { output: None }
    }

    /// Creates a console backed by a fresh capture buffer
    pub fn captured() -> (Self, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let mut console = Console::new();
        console.set_output(buffer.clone());
        (console, buffer)
    }

    /// Redirects all further lines into `output`
    pub fn set_output(&mut self, output: Arc<Mutex<Vec<u8>>>) {
        self.output = Some(output);
    }

    /// Writes `line` followed by a newline
    pub fn write_line(&mut self, line: &str) -> Result<(), FlowError> {
        match &self.output {
            Some(out) => {
                let mut buffer = out
                    .lock()
                    .map_err(|_| FlowError::output_error("capture buffer is poisoned".to_string()))?;
                writeln!(buffer, "{}", line)
            }
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", line)
            }
        }
        .map_err(|e| FlowError::output_error(format!("failed to write line: {}", e)))
    }

    /// Reads a capture buffer back as individual lines
    pub fn captured_lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Result<Vec<String>, FlowError> {
        let lock = buffer
            .lock()
            .map_err(|_| FlowError::output_error("capture buffer is poisoned".to_string()))?;
        Ok(String::from_utf8_lossy(&lock).lines().map(str::to_string).collect())
    }
}
