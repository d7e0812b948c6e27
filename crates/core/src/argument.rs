//! Declarative descriptors of the arguments a command line is expected to carry.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};

/// An argument identified by its 1-based ordinal position on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalArgument {
    name: String,
    position: usize,
}

impl PositionalArgument {
    /// Positions are not validated here. A position that breaks the
    /// contiguous `1..N` run is reported when parsing.
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl Ord for PositionalArgument {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position
            .cmp(&other.position)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for PositionalArgument {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for PositionalArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}` (position {})", self.name, self.position)
    }
}

/// A named flag, introduced by `--name` or, when a short name is set, `-short`.
///
/// The long name is mandatory while the short name is optional. A switch
/// can be required and can take the following token as its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchArgument {
    name: String,
    short_name: String,
    has_value: bool,
    required: bool,
}

impl SwitchArgument {
    /// Builds a switch with both a long and a short name. An empty
    /// `short_name` means the switch has no short form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySwitchName`] if `name` is empty or whitespace only.
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        has_value: bool,
        required: bool,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptySwitchName);
        }

        Ok(Self {
            name,
            short_name: short_name.into(),
            has_value,
            required,
        })
    }

    /// Builds a switch that can only be given in its long form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySwitchName`] if `name` is empty or whitespace only.
    pub fn long(name: impl Into<String>, has_value: bool, required: bool) -> Result<Self> {
        Self::new(name, "", has_value, required)
    }

    /// Long name, without the leading dashes.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short name, without the leading dash. Empty when the switch has none.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn has_short_name(&self) -> bool {
        !self.short_name.is_empty()
    }

    pub fn has_value(&self) -> bool {
        self.has_value
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

impl Display for SwitchArgument {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "--{}", self.name)?;

        if self.has_short_name() {
            write!(formatter, " (-{})", self.short_name)?;
        }

        Ok(())
    }
}
