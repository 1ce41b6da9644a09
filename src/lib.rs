// File: src/lib.rs
//
// Library interface for flowdemo.
// Exposes modules for integration testing and the CLI.

pub mod console;
pub mod errors;
pub mod programs;
pub mod snapshot;
