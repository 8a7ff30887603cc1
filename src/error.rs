//! # Error Types
//!
//! Everything that can go wrong between a carrier string and its raster.

use alloc::string::String;
use thiserror::Error;

/// Main error type for code128b operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character outside subset B (ASCII 32 to 126). `position` is 1-based.
    #[error("unsupported character {character:?} at position {position}")]
    UnsupportedCharacter { character: char, position: usize },

    /// A checksum value with no symbol. Unreachable with a complete table.
    #[error("no symbol for checksum value {0}")]
    ChecksumResolution(u32),

    /// Empty carrier text, rejected before encoding.
    #[error("carrier text is empty")]
    EmptyText,

    /// A pattern string with something other than '0' or '1'.
    #[error("invalid module {character:?} at position {position} in pattern")]
    InvalidPattern { character: char, position: usize },

    /// Degenerate render size.
    #[error("invalid render size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Malformed hex color.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Image encoding or I/O error
    #[cfg(feature = "image")]
    #[error("image error: {0}")]
    Image(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[cfg(feature = "image")]
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        use alloc::string::ToString;
        Error::Image(err.to_string())
    }
}
