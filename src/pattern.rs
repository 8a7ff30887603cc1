//! Encoded module sequences.

use alloc::vec::Vec;
use core::{fmt, str::FromStr};

use crate::{bitfield::Bitfield, Error};

/// An ordered sequence of modules, `true` being a bar and `false` a space.
///
/// Prints as a string of `'1'` and `'0'` and parses back from one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    modules: Vec<bool>,
}

impl Pattern {
    pub const BAR: char = '1';
    pub const SPACE: char = '0';

    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { modules: Vec::with_capacity(capacity) }
    }

    /// Appends every module of `field`.
    pub fn push(&mut self, field: Bitfield) {
        self.modules.extend(field);
    }

    /// Number of modules.
    #[inline]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    #[inline]
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.modules.iter().copied()
    }

    pub fn starts_with(&self, field: Bitfield) -> bool {
        self.modules.len() >= field.size() as usize
            && self.modules.iter().copied().zip(field).all(|(a, b)| a == b)
    }

    pub fn ends_with(&self, field: Bitfield) -> bool {
        let size = field.size() as usize;
        self.modules.len() >= size
            && self.modules[self.modules.len() - size..].iter().copied().eq(field)
    }
}

impl From<Vec<bool>> for Pattern {
    fn from(modules: Vec<bool>) -> Self {
        Self { modules }
    }
}

impl From<Pattern> for Vec<bool> {
    fn from(pattern: Pattern) -> Self {
        pattern.modules
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bar in &self.modules {
            f.write_str(if bar { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(i, c)| match c {
                Pattern::BAR => Ok(true),
                Pattern::SPACE => Ok(false),
                character => Err(Error::InvalidPattern { character, position: i + 1 }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Pattern::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_parse() {
        let pattern: Pattern = "1100011101011".parse().unwrap();
        assert_eq!(pattern.len(), 13);
        assert_eq!(pattern.to_string(), "1100011101011");
    }

    #[test]
    fn test_parse_rejects_other_characters() {
        assert_eq!(
            "1012".parse::<Pattern>(),
            Err(Error::InvalidPattern { character: '2', position: 4 })
        );
    }

    #[test]
    fn test_starts_and_ends_with() {
        let mut pattern = Pattern::new();
        pattern.push(Bitfield::new(0b110, 3));
        pattern.push(Bitfield::new(0b01, 2));
        assert!(pattern.starts_with(Bitfield::new(0b11, 2)));
        assert!(!pattern.starts_with(Bitfield::new(0b10, 2)));
        assert!(pattern.ends_with(Bitfield::new(0b001, 3)));
        assert!(!pattern.ends_with(Bitfield::new(0b110001, 6)));
    }
}
