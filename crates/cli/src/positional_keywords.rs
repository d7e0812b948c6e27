//! Positional arguments only: a tiny calculator.
//!
//! ```text
//! positional-keywords 2 '*' 3
//! 6
//!
//! positional-keywords 6 / 2
//! 3
//! ```

use log::debug;
use rust_args_core::CommandLineParser;

use crate::error::{Error, Result};

const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// # Errors
///
/// Returns an error if the command line doesn't match the expected arguments,
/// on division by zero, or on overflow.
pub fn run(args: &[String]) -> Result<String> {
    let mut parser = CommandLineParser::new();
    parser
        .add_positional("operand1", 1)?
        .add_positional("operand2", 3)?
        .add_positional("operator", 2)?;

    let parsed = parser.parse(args.iter().cloned())?;

    let operand1 = parsed.get_int("operand1")?;
    let operand2 = parsed.get_int("operand2")?;
    let operator = parsed.get_char_choice("operator", &OPERATORS)?;
    debug!("Evaluating {} {} {}", operand1, operator, operand2);

    let result = match operator {
        '+' => operand1.checked_add(operand2),
        '-' => operand1.checked_sub(operand2),
        '*' => operand1.checked_mul(operand2),
        _ => {
            if operand2 == 0 {
                return Err(Error::DivisionByZero);
            }
            operand1.checked_div(operand2)
        }
    };

    result
        .map(|value| value.to_string())
        .ok_or(Error::Overflow(operand1, operator, operand2))
}
