use std::process::ExitCode;

use rust_args_cli::{switch_arguments, run_main};

fn main() -> ExitCode {
    run_main(switch_arguments::run)
}
