//! Rust Args Core Library
//!
//! This crate parses command line arguments using two strategies that can be
//! combined on the same command line:
//!
//! - **Positional arguments**: values identified only by their 1-based
//!   position, handled by [`PositionalParser`]
//! - **Switch arguments**: named flags given as `--name` or `-n`, optionally
//!   followed by a value, handled by [`SwitchParser`]
//!
//! For normal usage neither parser should be used directly. Use
//! [`CommandLineParser`], which combines the two and checks that argument
//! names are unique across both.
//!
//! Parsed values are stored as raw strings in [`ParsedArguments`] and
//! converted on access by its typed accessors.
//!
//! # Examples
//!
//! ```
//! use rust_args_core::CommandLineParser;
//!
//! let mut parser = CommandLineParser::new();
//! parser
//!     .add_positional("operand1", 1)?
//!     .add_positional("operand2", 3)?
//!     .add_positional("operator", 2)?;
//!
//! let parsed = parser.parse(["2", "+", "3"])?;
//! assert_eq!(parsed.get_int("operand1")?, 2);
//! assert_eq!(parsed.get_char_choice("operator", &['+', '-', '*', '/'])?, '+');
//! assert_eq!(parsed.get_int("operand2")?, 3);
//! # Ok::<(), rust_args_core::error::Error>(())
//! ```

pub mod argument;
pub mod command_line;
pub mod error;
pub mod line_utils;
pub mod parsed_arguments;
pub mod positional;
pub mod switch;

pub use argument::{PositionalArgument, SwitchArgument};
pub use command_line::CommandLineParser;
pub use parsed_arguments::ParsedArguments;
pub use positional::PositionalParser;
pub use switch::SwitchParser;
