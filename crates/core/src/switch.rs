//! Parser for switch-based arguments (`-c` or `--option`).

use std::collections::HashMap;

use log::{debug, trace};

use crate::argument::SwitchArgument;
use crate::error::{Error, Result};
use crate::parsed_arguments::ParsedArguments;

const LONG_PREFIX: &str = "--";
const SHORT_PREFIX: &str = "-";

#[derive(Debug, Clone, Copy)]
enum State<'a> {
    /// Expecting a new switch.
    Start,
    /// The current token is a recognized long switch.
    LongOpt(&'a SwitchArgument),
    /// The current token is a recognized short switch.
    ShortOpt(&'a SwitchArgument),
    /// The current token is the value of the given switch.
    Value(&'a SwitchArgument),
}

#[derive(Debug, Clone, Default)]
pub struct SwitchParser {
    switches: Vec<SwitchArgument>,
}

impl SwitchParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_switch(&mut self, switch_argument: SwitchArgument) {
        self.switches.push(switch_argument);
    }

    /// Parses `args`, which must consist of switches only.
    ///
    /// A switch given more than once keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An argument is not prefixed with `-` or `--`
    /// - A switch is not registered
    /// - A value-taking switch is the last argument
    /// - A required switch is missing
    pub fn parse<S: AsRef<str>>(&self, args: &[S]) -> Result<ParsedArguments> {
        let mut parsed = ParsedArguments::new();
        let lookup = self.build_lookup();

        let mut state = State::Start;
        let mut index = 0;

        while let Some(arg) = args.get(index) {
            let arg = arg.as_ref();

            state = match state {
                // the token is only classified here, it is consumed in the next state
                State::Start => {
                    if arg.starts_with(LONG_PREFIX) {
                        State::LongOpt(Self::find(&lookup, arg)?)
                    } else if arg.starts_with(SHORT_PREFIX) {
                        State::ShortOpt(Self::find(&lookup, arg)?)
                    } else {
                        return Err(Error::InvalidArguments(arg.to_string()));
                    }
                }

                State::LongOpt(switch) | State::ShortOpt(switch) => {
                    index += 1;

                    if switch.has_value() {
                        if index == args.len() {
                            return Err(Error::MissingValue(arg.to_string()));
                        }
                        State::Value(switch)
                    } else {
                        trace!("Switch {} present", switch);
                        parsed.set_present(switch.name());
                        State::Start
                    }
                }

                State::Value(switch) => {
                    index += 1;

                    trace!("Switch {} set to `{}`", switch, arg);
                    parsed.set(switch.name(), arg);
                    State::Start
                }
            };
        }

        self.check_required(&parsed)?;

        debug!("Parsed {} switch arguments", parsed.len());
        Ok(parsed)
    }

    /// Maps `--name` and, when set, `-short` to their switch.
    fn build_lookup(&self) -> HashMap<String, &SwitchArgument> {
        let mut lookup = HashMap::new();

        for switch in &self.switches {
            lookup.insert(format!("{LONG_PREFIX}{}", switch.name()), switch);

            if switch.has_short_name() {
                lookup.insert(format!("{SHORT_PREFIX}{}", switch.short_name()), switch);
            }
        }

        lookup
    }

    fn find<'a>(
        lookup: &HashMap<String, &'a SwitchArgument>,
        arg: &str,
    ) -> Result<&'a SwitchArgument> {
        lookup
            .get(arg)
            .copied()
            .ok_or_else(|| Error::UnknownSwitch(arg.to_string()))
    }

    fn check_required(&self, parsed: &ParsedArguments) -> Result<()> {
        match self
            .switches
            .iter()
            .find(|switch| switch.is_required() && !parsed.has(switch.name()))
        {
            Some(missing) => Err(Error::MissingRequired(missing.name().to_string())),
            None => Ok(()),
        }
    }
}
