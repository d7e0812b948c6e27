use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Arguments(#[from] rust_args_core::error::Error),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow computing {} {} {}", .0, .1, .2)]
    Overflow(i32, char, i32),
}
