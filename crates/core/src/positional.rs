//! Parser for positional arguments.
//!
//! Positions are 1-based and must form a contiguous run: with N registered
//! arguments, positions `1..=N` must each be taken exactly once.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::argument::PositionalArgument;
use crate::error::{Error, Result};
use crate::parsed_arguments::ParsedArguments;

#[derive(Debug, Clone, Default)]
pub struct PositionalParser {
    // keyed by position, so a later registration at the same position replaces the earlier one
    positions: BTreeMap<usize, PositionalArgument>,
}

impl PositionalParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_positional(&mut self, positional_argument: PositionalArgument) {
        self.positions
            .insert(positional_argument.position(), positional_argument);
    }

    /// Number of registered slots.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Binds the leading `args` to the registered positional arguments.
    ///
    /// Extra trailing arguments are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registered positions are not exactly `1..=N`
    /// - There are fewer arguments than the highest registered position
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParsedArguments> {
        let mut parsed = ParsedArguments::new();

        let Some(last) = self.positions.values().next_back() else {
            return Ok(parsed);
        };

        self.check_positions()?;

        if last.position() > args.len() {
            return Err(Error::NotEnoughArguments {
                expected: last.position(),
                found: args.len(),
            });
        }

        for positional_argument in self.positions.values() {
            let value = args[positional_argument.position() - 1].as_ref();
            trace!("Positional {} bound to `{}`", positional_argument, value);
            parsed.set(positional_argument.name(), value);
        }

        debug!("Parsed {} positional arguments", parsed.len());
        Ok(parsed)
    }

    fn check_positions(&self) -> Result<()> {
        // positions start at 1, *not* 0
        for (expected, positional_argument) in (1..).zip(self.positions.values()) {
            if positional_argument.position() != expected {
                return Err(Error::invalid_position(
                    positional_argument.name(),
                    positional_argument.position(),
                ));
            }
        }

        Ok(())
    }
}
