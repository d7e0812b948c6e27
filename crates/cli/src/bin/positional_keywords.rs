use std::process::ExitCode;

use rust_args_cli::{positional_keywords, run_main};

fn main() -> ExitCode {
    run_main(positional_keywords::run)
}
