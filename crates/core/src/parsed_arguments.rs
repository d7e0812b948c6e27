//! Holder of parsed arguments.
//!
//! Values are kept as raw strings and converted on access. Every typed
//! accessor has an `_or` variant that returns the given default when the
//! argument is absent. A present but invalid value still fails, even when a
//! default was supplied.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use itertools::Itertools;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    values: IndexMap<String, String>,
}

impl ParsedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, name: &str) -> Result<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Checks if the given argument has been parsed.
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Marks the given argument as present without setting a value.
    pub fn set_present(&mut self, name: impl Into<String>) {
        self.set(name, "");
    }

    /// Sets the given argument's value, replacing any earlier one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Copies every entry of `other` into this store. Entries of `other` win
    /// on name collisions.
    pub fn merge(&mut self, other: ParsedArguments) {
        self.values.extend(other.values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, raw value)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.values.iter(),
        }
    }

    /// Returns the raw value of the given argument.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the argument is absent.
    pub fn get_string(&self, name: &str) -> Result<&str> {
        self.get(name)
    }

    pub fn get_string_or<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str> {
        if self.has(name) {
            return self.get_string(name);
        }
        Ok(default)
    }

    /// Returns the value converted to a base-10 integer. The whole value must
    /// be a valid integer literal; surrounding whitespace is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the argument is absent, or
    /// [`Error::InvalidInteger`] if the value is not an integer.
    pub fn get_int(&self, name: &str) -> Result<i32> {
        let value = self.get(name)?;
        value
            .parse()
            .map_err(|_| Error::invalid_integer(name, value))
    }

    pub fn get_int_or(&self, name: &str, default: i32) -> Result<i32> {
        if self.has(name) {
            return self.get_int(name);
        }
        Ok(default)
    }

    /// Returns the value converted to a single character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the argument is absent, or
    /// [`Error::NotACharacter`] unless the value is exactly one character.
    pub fn get_char(&self, name: &str) -> Result<char> {
        let value = self.get(name)?;
        value
            .chars()
            .exactly_one()
            .map_err(|_| Error::not_a_character(name, value))
    }

    pub fn get_char_or(&self, name: &str, default: char) -> Result<char> {
        if self.has(name) {
            return self.get_char(name);
        }
        Ok(default)
    }

    /// Returns the value if it is one of `choices`. Matching is exact and
    /// case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the argument is absent, or
    /// [`Error::InvalidChoice`] if the value is not in `choices`.
    pub fn get_choice(&self, name: &str, choices: &[&str]) -> Result<&str> {
        let value = self.get(name)?;
        if choices.contains(&value) {
            return Ok(value);
        }
        Err(Error::invalid_choice(name, value))
    }

    pub fn get_choice_or<'a>(
        &'a self,
        name: &str,
        choices: &[&str],
        default: &'a str,
    ) -> Result<&'a str> {
        if self.has(name) {
            return self.get_choice(name, choices);
        }
        Ok(default)
    }

    /// Single-character variant of [`ParsedArguments::get_choice`].
    ///
    /// # Errors
    ///
    /// Same as [`ParsedArguments::get_choice`].
    pub fn get_char_choice(&self, name: &str, choices: &[char]) -> Result<char> {
        let choices: Vec<String> = choices.iter().map(char::to_string).collect();
        let choices: Vec<&str> = choices.iter().map(String::as_str).collect();

        let value = self.get_choice(name, &choices)?;
        value
            .chars()
            .exactly_one()
            .map_err(|_| Error::not_a_character(name, value))
    }

    pub fn get_char_choice_or(&self, name: &str, choices: &[char], default: char) -> Result<char> {
        if self.has(name) {
            return self.get_char_choice(name, choices);
        }
        Ok(default)
    }

    /// Returns the value as a path. No filesystem check is performed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the argument is absent.
    pub fn get_file(&self, name: &str) -> Result<PathBuf> {
        self.get(name).map(PathBuf::from)
    }

    pub fn get_file_or(&self, name: &str, default: impl AsRef<Path>) -> Result<PathBuf> {
        if self.has(name) {
            return self.get_file(name);
        }
        Ok(default.as_ref().to_path_buf())
    }

    /// Returns the value as a path that must not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the argument is absent, or
    /// [`Error::FileExists`] if something already exists at the path.
    pub fn get_new_file(&self, name: &str) -> Result<PathBuf> {
        let path = self.get_file(name)?;

        if path.exists() {
            return Err(Error::FileExists(path));
        }

        Ok(path)
    }

    pub fn get_new_file_or(&self, name: &str, default: impl AsRef<Path>) -> Result<PathBuf> {
        if self.has(name) {
            return self.get_new_file(name);
        }
        Ok(default.as_ref().to_path_buf())
    }

    /// Returns the value as a path to an existing regular file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the argument is absent,
    /// [`Error::FileNotFound`] if nothing exists at the path, or
    /// [`Error::IsDirectory`] if the path is a directory.
    pub fn get_existing_file(&self, name: &str) -> Result<PathBuf> {
        let path = self.get_file(name)?;

        if !path.exists() {
            return Err(Error::FileNotFound(path));
        }

        if path.is_dir() {
            return Err(Error::IsDirectory(path));
        }

        Ok(path)
    }

    pub fn get_existing_file_or(&self, name: &str, default: impl AsRef<Path>) -> Result<PathBuf> {
        if self.has(name) {
            return self.get_existing_file(name);
        }
        Ok(default.as_ref().to_path_buf())
    }
}

/// Iterator over the `(name, raw value)` pairs of a [`ParsedArguments`].
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a ParsedArguments {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
