// File: src/programs/loops.rs
//
// Loop/conditional sample. Three independent steps, always in this order:
// - nested sign classification of two fixed integers
// - a counting while loop that special-cases one counter value
// - a for loop enumerating 1..=5

use crate::console::Console;
use crate::errors::FlowError;

pub const X: i32 = 10;
pub const Y: i32 = 5;

/// Exclusive upper bound of the counting loop
const RESULT_LIMIT: i32 = 3;
/// Counter value that gets its own line
const SPECIAL_RESULT: i32 = 1;
/// Inclusive upper bound of the enumeration loop
const ITERATIONS: i32 = 5;

/// Runs the sample with its fixed values
pub fn run(console: &mut Console) -> Result<(), FlowError> {
    run_with(X, Y, console)
}

pub fn run_with(x: i32, y: i32, console: &mut Console) -> Result<(), FlowError> {
    classify_signs(x, y, console)?;
    count_results(console)?;
    enumerate_iterations(console)
}

/// Emits exactly one of three lines. `y` is only consulted when `x > 0`,
/// so a non-positive `x` reports the same line whatever `y` is.
pub fn classify_signs(x: i32, y: i32, console: &mut Console) -> Result<(), FlowError> {
    if x > 0 {
        if y > 0 {
            console.write_line("Both x and y are positive")
        } else {
            console.write_line("x is positive but y is not")
        }
    } else {
        console.write_line("x is not positive")
    }
}

pub fn count_results(console: &mut Console) -> Result<(), FlowError> {
    let mut result = 0;
    while result < RESULT_LIMIT {
        if result == SPECIAL_RESULT {
            console.write_line("Result is one")?;
        } else {
            console.write_line("Result is not one")?;
        }

        result += 1;
    }
    Ok(())
}

pub fn enumerate_iterations(console: &mut Console) -> Result<(), FlowError> {
    for i in 1..=ITERATIONS {
        console.write_line(&format!("For loop iteration: {}", i))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(x: i32, y: i32) -> Vec<String> {
        let (mut console, buffer) = Console::captured();
        classify_signs(x, y, &mut console).unwrap();
        Console::captured_lines(&buffer).unwrap()
    }

    #[test]
    fn test_classification_covers_every_sign_pair() {
        assert_eq!(classify(10, 5), vec!["Both x and y are positive"]);
        assert_eq!(classify(10, 0), vec!["x is positive but y is not"]);
        assert_eq!(classify(10, -5), vec!["x is positive but y is not"]);
        assert_eq!(classify(0, 5), vec!["x is not positive"]);
        assert_eq!(classify(-10, 5), vec!["x is not positive"]);
        assert_eq!(classify(-10, -5), vec!["x is not positive"]);
    }

    #[test]
    fn test_classification_emits_exactly_one_line() {
        for x in -2..=2 {
            for y in -2..=2 {
                assert_eq!(classify(x, y).len(), 1, "x={} y={}", x, y);
            }
        }
    }

    #[test]
    fn test_count_results_special_cases_one() {
        let (mut console, buffer) = Console::captured();
        count_results(&mut console).unwrap();
        assert_eq!(
            Console::captured_lines(&buffer).unwrap(),
            vec!["Result is not one", "Result is one", "Result is not one"]
        );
    }

    #[test]
    fn test_enumeration_is_increasing_without_gaps() {
        let (mut console, buffer) = Console::captured();
        enumerate_iterations(&mut console).unwrap();
        let expected: Vec<String> = (1..=5).map(|i| format!("For loop iteration: {}", i)).collect();
        assert_eq!(Console::captured_lines(&buffer).unwrap(), expected);
    }

    #[test]
    fn test_full_run_has_nine_lines() {
        let (mut console, buffer) = Console::captured();
        run(&mut console).unwrap();
        let lines = Console::captured_lines(&buffer).unwrap();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "Both x and y are positive");
        assert_eq!(lines[8], "For loop iteration: 5");
    }
}
