// File: src/programs/fallthrough.rs
//
// Switch sample whose first arm has no break, so execution falls into
// the next arm until an arm that breaks or the default arm is reached.

use crate::console::Console;
use crate::errors::FlowError;

pub const GRADE: char = 'A';

/// A labelled arm of the switch
struct Case {
    label: char,
    line: &'static str,
    breaks: bool,
}

const CASES: &[Case] = &[
    Case { label: 'A', line: "Excellent", breaks: false },
    Case { label: 'B', line: "Good or Excellent", breaks: true },
    Case { label: 'C', line: "Average", breaks: true },
];

/// Default arm, placed after the labelled cases
const DEFAULT_LINE: &str = "Fail";

pub fn run(console: &mut Console) -> Result<(), FlowError> {
    run_with_grade(GRADE, console)
}

/// Enters at the matching case and falls through until a case breaks.
/// Running off the last case, or matching none, lands in the default arm.
pub fn run_with_grade(grade: char, console: &mut Console) -> Result<(), FlowError> {
    if let Some(entry) = CASES.iter().position(|case| case.label == grade) {
        for case in &CASES[entry..] {
            console.write_line(case.line)?;
            if case.breaks {
                return Ok(());
            }
        }
    }

    console.write_line(DEFAULT_LINE)
}
