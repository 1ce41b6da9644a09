// File: src/programs/do_while.rs
//
// Do-while sample: two post-tested loops, one counting up and one
// counting down. Each body runs once before its condition is checked.

use crate::console::Console;
use crate::errors::FlowError;

pub const I_START: i32 = 0;
pub const J_START: i32 = 10;

pub fn run(console: &mut Console) -> Result<(), FlowError> {
    run_with(I_START, J_START, console)
}

pub fn run_with(i_start: i32, j_start: i32, console: &mut Console) -> Result<(), FlowError> {
    let mut i = i_start;
    loop {
        console.write_line(&format!("Value of i: {}", i))?;
        // a start value at i32::MAX has no successor, so the loop ends there
        match i.checked_add(1) {
            Some(next) if next < 5 => i = next,
            _ => break,
        }
    }

    let mut j = j_start;
    loop {
        console.write_line(&format!("Value of j: {}", j))?;
        match j.checked_sub(1) {
            Some(next) if next > 5 => j = next,
            _ => break,
        }
    }
    Ok(())
}
