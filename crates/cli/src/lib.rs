//! Rust Args demo programs
//!
//! Small command line programs built on `rust-args-core`. Each program's
//! logic lives in a `run` function that takes the command line (without the
//! executable name) and returns the text to print, so it can be tested
//! without spawning a process.
//!
//! - [`mixed_style`]: a positional operation followed by switches
//! - [`switch_arguments`]: switches only, some optional
//! - [`positional_keywords`]: positional arguments only
//!
//! ```bash
//! mixed-style add --op1 5 --op2 3
//! switch-arguments --name John --surname Doe --nickname White --decorate
//! positional-keywords 2 '*' 3
//! ```

pub mod error;
pub mod mixed_style;
pub mod positional_keywords;
pub mod switch_arguments;

use std::process::ExitCode;

use log::debug;

use crate::error::Result;

/// Runs a demo against the process arguments and reports the outcome.
///
/// Output goes to stdout on success. On failure the error goes to stderr and
/// the process exits with a failure code.
pub fn run_main(run: fn(&[String]) -> Result<String>) -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    debug!("Command line: {:?}", args);

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
