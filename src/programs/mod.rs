// File: src/programs/mod.rs
//
// Catalogue of the sample programs.
//
// Each program is a fixed, input-free procedure that writes a deterministic
// sequence of lines to a Console. The catalogue lets the CLI and the
// snapshot runner address them by name.

pub mod do_while;
pub mod fallthrough;
pub mod loops;
pub mod switch;

use crate::console::Console;
use crate::errors::FlowError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Switch,
    Loops,
    Fallthrough,
    DoWhile,
}

/// Serializable summary used by `flowdemo list --json`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProgramInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub lines: usize,
}

impl Program {
    pub fn all() -> [Program; 4] {
        [Program::Switch, Program::Loops, Program::Fallthrough, Program::DoWhile]
    }

    pub fn name(self) -> &'static str {
        match self {
            Program::Switch => "switch",
            Program::Loops => "loops",
            Program::Fallthrough => "fallthrough",
            Program::DoWhile => "do-while",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Program::Switch => "Multi-way selection over a fixed integer with a default case",
            Program::Loops => "Nested sign check, a counting while loop and a for loop",
            Program::Fallthrough => "Switch where one case falls through into the next",
            Program::DoWhile => "Two post-tested loops counting up and down",
        }
    }

    /// Number of lines the program emits with its fixed values
    pub fn expected_lines(self) -> usize {
        match self {
            Program::Switch => 4,
            Program::Loops => 9,
            Program::Fallthrough => 2,
            Program::DoWhile => 10,
        }
    }

    pub fn info(self) -> ProgramInfo {
        ProgramInfo {
            name: self.name(),
            description: self.description(),
            lines: self.expected_lines(),
        }
    }

    pub fn names() -> Vec<String> {
        Program::all().iter().map(|p| p.name().to_string()).collect()
    }

    /// Looks a program up by its catalogue name
    pub fn from_name(name: &str) -> Result<Program, FlowError> {
        Program::all()
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| FlowError::unknown_program(name, &Program::names()))
    }

    pub fn run(self, console: &mut Console) -> Result<(), FlowError> {
        tracing::debug!(program = self.name(), "running sample program");
        match self {
            Program::Switch => switch::run(console),
            Program::Loops => loops::run(console),
            Program::Fallthrough => fallthrough::run(console),
            Program::DoWhile => do_while::run(console),
        }
    }

    /// Runs the program into a fresh capture buffer and returns its lines
    pub fn capture(self) -> Result<Vec<String>, FlowError> {
        let (mut console, buffer) = Console::captured();
        self.run(&mut console)?;
        let lines = Console::captured_lines(&buffer)?;
        tracing::debug!(program = self.name(), lines = lines.len(), "captured output");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_lookup() {
        for program in Program::all() {
            assert_eq!(Program::from_name(program.name()).unwrap(), program);
        }
    }

    #[test]
    fn test_expected_lines_match_actual_output() {
        for program in Program::all() {
            assert_eq!(program.capture().unwrap().len(), program.expected_lines(), "{}", program.name());
        }
    }

    #[test]
    fn test_unknown_name_suggests_closest() {
        let err = Program::from_name("fallthru").unwrap_err();
        assert_eq!(err.suggestion.as_deref(), Some("fallthrough"));
    }
}
