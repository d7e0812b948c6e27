use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Broad category of an [`Error`], matching the stage at which it was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while registering argument specs.
    Configuration,
    /// Raised while binding positional arguments.
    PositionalArgument,
    /// Raised while tokenizing switch arguments.
    SwitchArgument,
    /// Raised by the typed accessors of `ParsedArguments`.
    TypeConversion,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{}` is a duplicate argument name", .0)]
    DuplicateName(String),

    #[error("Switch long name can't be empty")]
    EmptySwitchName,

    #[error("Positional argument `{}` can't be at position {}", .name, .position)]
    InvalidPosition { name: String, position: usize },

    #[error("Not enough positional arguments: expected {}, found {}", .expected, .found)]
    NotEnoughArguments { expected: usize, found: usize },

    #[error("`{}` is an unknown argument", .0)]
    UnknownSwitch(String),

    #[error("Invalid arguments: `{}` is not a switch", .0)]
    InvalidArguments(String),

    #[error("Missing value for `{}`", .0)]
    MissingValue(String),

    #[error("`{}` is a required argument", .0)]
    MissingRequired(String),

    #[error("`{}` is not a valid argument", .0)]
    NotFound(String),

    #[error("Cannot convert `{}` to integer for argument `{}`", .value, .name)]
    InvalidInteger { name: String, value: String },

    #[error("Value `{}` for argument `{}` is not a single character", .value, .name)]
    NotACharacter { name: String, value: String },

    #[error("Value `{}` for argument `{}` is not in the allowed choice set", .value, .name)]
    InvalidChoice { name: String, value: String },

    #[error("File `{}` already exists", .0.display())]
    FileExists(PathBuf),

    #[error("File `{}` doesn't exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("`{}` is a directory", .0.display())]
    IsDirectory(PathBuf),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateName(_) | Self::EmptySwitchName => ErrorKind::Configuration,

            Self::InvalidPosition { .. } | Self::NotEnoughArguments { .. } => {
                ErrorKind::PositionalArgument
            }

            Self::UnknownSwitch(_)
            | Self::InvalidArguments(_)
            | Self::MissingValue(_)
            | Self::MissingRequired(_) => ErrorKind::SwitchArgument,

            Self::NotFound(_)
            | Self::InvalidInteger { .. }
            | Self::NotACharacter { .. }
            | Self::InvalidChoice { .. }
            | Self::FileExists(_)
            | Self::FileNotFound(_)
            | Self::IsDirectory(_) => ErrorKind::TypeConversion,
        }
    }

    pub fn invalid_position(name: &str, position: usize) -> Self {
        Self::InvalidPosition {
            name: name.to_string(),
            position,
        }
    }

    pub fn invalid_integer(name: &str, value: &str) -> Self {
        Self::InvalidInteger {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn not_a_character(name: &str, value: &str) -> Self {
        Self::NotACharacter {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_choice(name: &str, value: &str) -> Self {
        Self::InvalidChoice {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}
