//! Combined positional and switch parsing.
//!
//! This is the entry point that should normally be used. Positional
//! arguments come first on the command line and switches follow them.

use indexmap::IndexSet;
use log::{debug, trace};

use crate::argument::{PositionalArgument, SwitchArgument};
use crate::error::{Error, Result};
use crate::line_utils::shift_args;
use crate::parsed_arguments::ParsedArguments;
use crate::positional::PositionalParser;
use crate::switch::SwitchParser;

/// Parser combining [`PositionalParser`] and [`SwitchParser`].
///
/// Argument names must be unique across both kinds of argument. Registration
/// methods return the parser so they can be chained:
///
/// ```
/// use rust_args_core::CommandLineParser;
///
/// let mut parser = CommandLineParser::new();
/// parser
///     .add_positional("op", 1)?
///     .add_switch("op1", true, true)?
///     .add_switch("op2", true, true)?
///     .add_switch("easter-egg", false, false)?;
///
/// let parsed = parser.parse(["add", "--op1", "5", "--op2", "3"])?;
/// assert_eq!(parsed.get_choice("op", &["add", "sub"])?, "add");
/// assert_eq!(parsed.get_int("op1")? + parsed.get_int("op2")?, 8);
/// assert!(!parsed.has("easter-egg"));
/// # Ok::<(), rust_args_core::error::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandLineParser {
    positional_parser: PositionalParser,
    switch_parser: SwitchParser,
    names: IndexSet<String>,
    // counts registrations, including ones that replaced an earlier position
    positional_count: usize,
}

impl CommandLineParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if `name` is already registered.
    pub fn add_positional(&mut self, name: &str, position: usize) -> Result<&mut Self> {
        self.add_positional_argument(PositionalArgument::new(name, position))
    }

    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if the argument's name is already registered.
    pub fn add_positional_argument(
        &mut self,
        positional_argument: PositionalArgument,
    ) -> Result<&mut Self> {
        self.register_name(positional_argument.name())?;
        self.positional_parser.add_positional(positional_argument);
        self.positional_count += 1;
        Ok(self)
    }

    /// Registers a switch that only has a long form.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or already registered.
    pub fn add_switch(&mut self, name: &str, has_value: bool, required: bool) -> Result<&mut Self> {
        self.add_switch_argument(SwitchArgument::long(name, has_value, required)?)
    }

    /// Registers a switch with both a long and a short form.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or already registered.
    pub fn add_switch_with_short(
        &mut self,
        name: &str,
        short_name: &str,
        has_value: bool,
        required: bool,
    ) -> Result<&mut Self> {
        self.add_switch_argument(SwitchArgument::new(name, short_name, has_value, required)?)
    }

    /// # Errors
    ///
    /// Returns [`Error::DuplicateName`] if the switch's name is already registered.
    pub fn add_switch_argument(&mut self, switch_argument: SwitchArgument) -> Result<&mut Self> {
        self.register_name(switch_argument.name())?;
        self.switch_parser.add_switch(switch_argument);
        Ok(self)
    }

    fn register_name(&mut self, name: &str) -> Result<()> {
        if !self.names.insert(name.to_string()) {
            return Err(Error::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Parses `args`. The input is expected not to contain the name of the
    /// executable; see [`CommandLineParser::parse_env`] for that.
    ///
    /// The leading arguments are bound to the positional arguments, and
    /// everything after them is parsed as switches. One leading argument is
    /// skipped per positional registration, even when a later registration
    /// replaced an earlier one at the same position.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by either parser, unchanged.
    pub fn parse<I, T>(&self, args: I) -> Result<ParsedArguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        debug!("Parsing {} arguments", args.len());
        trace!("Arguments: {:?}", args);

        let mut parsed = self.positional_parser.parse(&args)?;

        let switch_args = shift_args(&args, self.positional_count);
        parsed.merge(self.switch_parser.parse(switch_args)?);

        Ok(parsed)
    }

    /// Parses the arguments of the current process, skipping the name of the
    /// executable.
    ///
    /// # Errors
    ///
    /// Same as [`CommandLineParser::parse`].
    pub fn parse_env(&self) -> Result<ParsedArguments> {
        self.parse(std::env::args().skip(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const ARGS_THREE_KEYWORDS: [&str; 3] = ["kw1", "kw2", "kw3"];
    const ARGS_SWITCHES_CLASSIC: [&str; 6] = [
        "--required1",
        "required1",
        "--required2",
        "required2",
        "--optional",
        "value",
    ];
    const ARGS_MIXED_CLASSIC: [&str; 9] = [
        "item1",
        "item2",
        "item3",
        "--required1",
        "required1",
        "--required2",
        "required2",
        "--optional",
        "value",
    ];

    fn add_classic_switches(parser: &mut CommandLineParser) {
        parser
            .add_switch("required1", true, true)
            .unwrap()
            .add_switch("required2", true, true)
            .unwrap()
            .add_switch("boolean", false, false)
            .unwrap()
            .add_switch("optional", true, false)
            .unwrap();
    }

    fn assert_classic_switches(parsed: &ParsedArguments) {
        assert_eq!(parsed.get_string("required1").unwrap(), "required1");
        assert_eq!(parsed.get_string("required2").unwrap(), "required2");
        assert_eq!(parsed.get_string("optional").unwrap(), "value");
        assert!(!parsed.has("invalid"));
        assert!(!parsed.has("boolean"));
    }

    #[test]
    fn test_positional_only() {
        let mut parser = CommandLineParser::new();
        parser
            .add_positional_argument(PositionalArgument::new("keyword1", 1))
            .unwrap();
        parser
            .add_positional_argument(PositionalArgument::new("keyword2", 2))
            .unwrap();
        parser
            .add_positional_argument(PositionalArgument::new("keyword3", 3))
            .unwrap();

        let parsed = parser.parse(ARGS_THREE_KEYWORDS).unwrap();

        assert_eq!(parsed.get_string("keyword1").unwrap(), "kw1");
        assert_eq!(parsed.get_string("keyword2").unwrap(), "kw2");
        assert_eq!(parsed.get_string("keyword3").unwrap(), "kw3");
    }

    #[test]
    fn test_switches_only() {
        let mut parser = CommandLineParser::new();
        add_classic_switches(&mut parser);

        let parsed = parser.parse(ARGS_SWITCHES_CLASSIC).unwrap();
        assert_classic_switches(&parsed);
    }

    #[test]
    fn test_mixed() {
        let mut parser = CommandLineParser::new();
        parser
            .add_positional("keyword1", 1)
            .unwrap()
            .add_positional("keyword2", 2)
            .unwrap()
            .add_positional("keyword3", 3)
            .unwrap();
        add_classic_switches(&mut parser);

        let parsed = parser.parse(ARGS_MIXED_CLASSIC).unwrap();

        assert_eq!(parsed.get_string("keyword1").unwrap(), "item1");
        assert_eq!(parsed.get_string("keyword2").unwrap(), "item2");
        assert_eq!(parsed.get_string("keyword3").unwrap(), "item3");
        assert_classic_switches(&parsed);
        assert_eq!(parsed.len(), 6);
    }

    #[test]
    fn test_short_switches() -> Result<()> {
        let mut parser = CommandLineParser::new();
        parser
            .add_switch_with_short("input", "i", true, true)?
            .add_switch_with_short("output", "o", true, true)?;

        let parsed = parser.parse(["-i", "v1", "-o", "v2"])?;

        assert_eq!(parsed.get_string("input")?, "v1");
        assert_eq!(parsed.get_string("output")?, "v2");
        Ok(())
    }

    #[test]
    fn test_duplicate_names_across_kinds() {
        let mut parser = CommandLineParser::new();
        parser
            .add_switch_argument(SwitchArgument::long("key", true, true).unwrap())
            .unwrap();

        let result = parser.add_positional_argument(PositionalArgument::new("key", 1));
        match result {
            Err(error) => {
                assert!(matches!(error, Error::DuplicateName(ref name) if name == "key"));
                assert_eq!(error.kind(), ErrorKind::Configuration);
            }
            Ok(_) => panic!("Expected duplicate name error"),
        }
    }

    #[test]
    fn test_duplicate_switch() {
        let mut parser = CommandLineParser::new();
        parser.add_switch("value", true, true).unwrap();
        assert!(matches!(
            parser.add_switch("value", true, true),
            Err(Error::DuplicateName(_))
        ));
    }

    #[test]
    fn test_duplicate_positional() {
        let mut parser = CommandLineParser::new();
        parser.add_positional("keyword", 1).unwrap();
        assert!(matches!(
            parser.add_positional("keyword", 2),
            Err(Error::DuplicateName(_))
        ));
    }

    #[test]
    fn test_empty_switch_name() {
        let mut parser = CommandLineParser::new();
        let result = parser.add_switch(" ", false, false);
        assert!(matches!(result, Err(Error::EmptySwitchName)));
    }

    #[test]
    fn test_chaining() -> Result<()> {
        let mut parser = CommandLineParser::new();
        parser
            .add_positional("item1", 1)?
            .add_positional("item2", 2)?
            .add_positional("item3", 3)?
            .add_switch("required1", true, true)?
            .add_switch("required2", true, true)?
            .add_switch("boolean", false, false)?
            .add_switch("optional", true, false)?;

        parser.parse(ARGS_MIXED_CLASSIC)?;
        Ok(())
    }

    #[test]
    fn test_chaining_random_order() -> Result<()> {
        let mut parser = CommandLineParser::new();
        parser
            .add_switch("required1", true, true)?
            .add_positional("item3", 3)?
            .add_switch("required2", true, true)?
            .add_positional("item1", 1)?
            .add_switch("optional", true, false)?
            .add_positional("item2", 2)?
            .add_switch("boolean", false, false)?;

        let parsed = parser.parse(ARGS_MIXED_CLASSIC)?;
        assert_eq!(parsed.get_string("item1")?, "item1");
        assert_eq!(parsed.get_string("item3")?, "item3");
        Ok(())
    }

    #[test]
    fn test_positional_error_propagates_unchanged() {
        let mut parser = CommandLineParser::new();
        parser.add_positional("first", 1).unwrap();
        parser.add_positional("second", 2).unwrap();

        assert!(matches!(
            parser.parse(["one"]),
            Err(Error::NotEnoughArguments { .. })
        ));
    }

    #[test]
    fn test_switch_error_propagates_unchanged() {
        let mut parser = CommandLineParser::new();
        parser.add_positional("op", 1).unwrap();
        parser.add_switch("flag", false, false).unwrap();

        // the second positional-looking token is handed to the switch parser
        assert!(matches!(
            parser.parse(["add", "extra"]),
            Err(Error::InvalidArguments(arg)) if arg == "extra"
        ));
    }

    #[test]
    fn test_overridden_position_still_consumes_a_token() {
        let mut parser = CommandLineParser::new();
        parser
            .add_positional("cmd", 1)
            .unwrap()
            .add_positional("cmd2", 1)
            .unwrap()
            .add_switch("flag", false, false)
            .unwrap();

        let parsed = parser.parse(["value", "extra", "--flag"]).unwrap();
        assert_eq!(parsed.get_string("cmd2").unwrap(), "value");
        assert!(!parsed.has("cmd"));
        assert!(parsed.has("flag"));

        // the replaced registration still claims its token
        assert!(matches!(
            parser.parse(["value", "--flag"]),
            Ok(parsed) if !parsed.has("flag")
        ));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let mut parser = CommandLineParser::new();
        parser.add_positional("name", 1).unwrap();

        let first = parser.parse(["one"]).unwrap();
        let second = parser.parse(["two"]).unwrap();

        assert_eq!(first.get_string("name").unwrap(), "one");
        assert_eq!(second.get_string("name").unwrap(), "two");
    }
}
