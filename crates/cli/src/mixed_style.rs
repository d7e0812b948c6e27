//! Positional operation followed by switch operands.
//!
//! ```text
//! mixed-style add --op1 5 --op2 3
//! 8
//!
//! mixed-style sub --op1 5 --op2 3
//! 2
//!
//! mixed-style add --op1 1 --op2 2 --easter-egg
//! EASTER EGG!!!
//! ```

use rust_args_core::CommandLineParser;

use crate::error::{Error, Result};

const EASTER_EGG: &str = "EASTER EGG!!!";

/// # Errors
///
/// Returns an error if the command line doesn't match the expected arguments,
/// or if the result doesn't fit in an `i32`.
pub fn run(args: &[String]) -> Result<String> {
    let mut parser = CommandLineParser::new();
    parser
        .add_positional("op", 1)?
        .add_switch("op1", true, true)?
        .add_switch("op2", true, true)?
        .add_switch("easter-egg", false, false)?;

    let parsed = parser.parse(args.iter().cloned())?;

    let op = parsed.get_choice("op", &["add", "sub"])?;
    let op1 = parsed.get_int("op1")?;
    let op2 = parsed.get_int("op2")?;

    if parsed.has("easter-egg") {
        return Ok(EASTER_EGG.to_string());
    }

    let result = match op {
        "add" => op1.checked_add(op2).ok_or(Error::Overflow(op1, '+', op2))?,
        _ => op1.checked_sub(op2).ok_or(Error::Overflow(op1, '-', op2))?,
    };

    Ok(result.to_string())
}
