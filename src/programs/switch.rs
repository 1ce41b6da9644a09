// File: src/programs/switch.rs
//
// Branch-selection sample: a multi-way selection over a fixed integer,
// bracketed by start and end marker lines.

use crate::console::Console;
use crate::errors::FlowError;

/// Value the sample selects on
pub const CHOICE: i32 = 2;

/// Runs the sample with its fixed choice
pub fn run(console: &mut Console) -> Result<(), FlowError> {
    run_with_choice(CHOICE, console)
}

/// Emits the start marker, exactly one branch line, then the two end markers
pub fn run_with_choice(choice: i32, console: &mut Console) -> Result<(), FlowError> {
    console.write_line("Program start")?;

    match choice {
        1 => console.write_line("Executing case 1")?,
        2 => console.write_line("Executing case 2")?,
        3 => console.write_line("Executing case 3")?,
        _ => console.write_line("Executing default case")?,
    }

    console.write_line("After switch block")?;
    console.write_line("Program end")?;
    Ok(())
}
