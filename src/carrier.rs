//! The carrier number as accepted from the outside.

use alloc::string::String;
use core::fmt;

use crate::{tables, Error, Pattern, Result};

/// A trimmed, non-empty string made only of subset B characters.
///
/// By convention mobile carriers start with `/` (e.g. `/ABC123`), but the
/// prefix is not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CarrierNumber(String);

impl CarrierNumber {
    pub fn parse(input: &str) -> Result<Self> {
        let text = input.trim();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }
        if let Some((i, c)) = text.chars().enumerate().find(|&(_, c)| tables::value_of(c).is_none()) {
            return Err(Error::UnsupportedCharacter { character: c, position: i + 1 });
        }
        Ok(Self(text.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn encode(&self) -> Result<Pattern> {
        crate::encode(&self.0)
    }
}

impl fmt::Display for CarrierNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for CarrierNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for CarrierNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
