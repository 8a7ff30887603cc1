//! Text to Code 128 subset B module pattern.

use crate::bitfield::Bitfield;
use crate::pattern::Pattern;
use crate::tables::{self, CHECKSUM_MOD, START_B, START_B_PAT, STOP_PAT, SYMBOLS, SYMBOL_LEN};
use crate::{Error, Result};

/// Number of modules produced for a text of `chars` characters: Start,
/// one symbol per character, the check symbol, then Stop.
pub const fn encoded_len(chars: usize) -> usize {
    SYMBOL_LEN as usize * (chars + 2) + tables::STOP_LEN as usize
}

/// Use a Code128Encoder to append text to a subset B symbol and seal it
/// with its check symbol.
#[derive(Debug, Clone)]
pub struct Code128Encoder {
    pattern: Pattern,
    // weighted sum mod 103, seeded with the Start B value
    sum: u32,
    count: usize,
}

impl Default for Code128Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Code128Encoder {
    /// Creates an encoder with the Start Code B symbol already emitted.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Same as [Code128Encoder::new] with room for `chars` data characters.
    pub fn with_capacity(chars: usize) -> Self {
        let mut pattern = Pattern::with_capacity(encoded_len(chars));
        pattern.push(START_B_PAT);
        Self { pattern, sum: START_B as u32, count: 0 }
    }

    /// Returns the number of data characters already appended.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the check symbol value for the data appended so far.
    pub fn checksum(&self) -> u32 {
        self.sum % CHECKSUM_MOD
    }

    /// Appends a single character. Its weight in the checksum is its
    /// 1-based position in the symbol.
    pub fn append_char(mut self, c: char) -> Result<Self> {
        let position = self.count + 1;
        let Some(value) = tables::value_of(c) else {
            tracing::warn!("unsupported character {c:?} at position {position}");
            return Err(Error::UnsupportedCharacter { character: c, position });
        };
        self.pattern.push(Bitfield::new(SYMBOLS[value as usize] as u32, SYMBOL_LEN));
        let weight = (position % CHECKSUM_MOD as usize) as u32;
        self.sum = (self.sum + value as u32 * weight) % CHECKSUM_MOD;
        self.count = position;
        Ok(self)
    }

    /// Appends every character of `s`.
    pub fn append_str(self, s: &str) -> Result<Self> {
        s.chars().try_fold(self, Self::append_char)
    }

    /// Emits the check symbol and Stop and returns the finished pattern.
    pub fn seal(mut self) -> Result<Pattern> {
        let checksum = self.checksum();
        let pat = tables::pattern_of(checksum).ok_or(Error::ChecksumResolution(checksum))?;
        tracing::trace!("sealing {} characters with check symbol {checksum}", self.count);

        self.pattern.push(pat);
        self.pattern.push(STOP_PAT);
        Ok(self.pattern)
    }
}

/// Encodes `text` as Code 128 subset B.
///
/// Every character must be printable ASCII (32 to 126); otherwise the call
/// fails with [Error::UnsupportedCharacter] and nothing is returned. Empty
/// text encodes to Start, check symbol 1 and Stop; callers wanting to reject
/// it should go through [CarrierNumber](crate::CarrierNumber).
#[tracing::instrument(level = "trace", skip_all, fields(bytes = text.len()))]
pub fn encode(text: &str) -> Result<Pattern> {
    Code128Encoder::with_capacity(text.len())
        .append_str(text)?
        .seal()
}

/// Check symbol value of `text`.
pub fn checksum(text: &str) -> Result<u32> {
    Ok(Code128Encoder::new().append_str(text)?.checksum())
}
