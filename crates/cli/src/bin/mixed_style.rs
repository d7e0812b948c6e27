use std::process::ExitCode;

use rust_args_cli::{mixed_style, run_main};

fn main() -> ExitCode {
    run_main(mixed_style::run)
}
