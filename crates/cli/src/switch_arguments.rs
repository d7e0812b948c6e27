//! Switches only, mixing required, optional and boolean ones.
//!
//! ```text
//! switch-arguments --name John --surname Doe
//! John Doe
//!
//! switch-arguments --name John --surname Doe --nickname White
//! John "White" Doe
//!
//! switch-arguments --name John --decorate --surname Doe --nickname White
//! _-* John "White" Doe *-_
//! ```

use rust_args_core::CommandLineParser;

use crate::error::Result;

const DECORATION_LEFT: &str = "_-* ";
const DECORATION_RIGHT: &str = " *-_";

/// # Errors
///
/// Returns an error if the command line doesn't match the expected arguments.
pub fn run(args: &[String]) -> Result<String> {
    let mut parser = CommandLineParser::new();
    parser
        .add_switch("name", true, true)?
        .add_switch("surname", true, true)?
        .add_switch("nickname", true, false)?
        .add_switch("decorate", false, false)?;

    let parsed = parser.parse(args.iter().cloned())?;

    let name = parsed.get_string("name")?;
    let surname = parsed.get_string("surname")?;
    let nickname = parsed.get_string_or("nickname", "")?;

    let mut output = String::from(name);
    output.push(' ');
    if !nickname.is_empty() {
        output.push_str(&format!("\"{nickname}\" "));
    }
    output.push_str(surname);

    if parsed.has("decorate") {
        output = format!("{DECORATION_LEFT}{output}{DECORATION_RIGHT}");
    }

    Ok(output)
}
