//! RGBA colors and the hex notation used by themes.

use alloc::string::ToString;
use core::{fmt, str::FromStr};

use crate::Error;

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// Source-over: `self` painted on top of `dst`. Channels are straight
    /// (not premultiplied) alpha.
    pub fn over(self, dst: Color) -> Color {
        let sa = self.a as u32;
        let da = (dst.a as u32 * (255 - sa) + 127) / 255;
        let a = sa + da;
        if a == 0 {
            return Color::TRANSPARENT;
        }
        let mix = |s: u8, d: u8| ((s as u32 * sa + d as u32 * da + a / 2) / a) as u8;
        Color::rgba(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b), a as u8)
    }

    /// Parses `RGB`, `RRGGBB` or `AARRGGBB` hex digits. Leading and
    /// trailing non-alphanumeric characters (such as `#`) are ignored.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.trim_matches(|c: char| !c.is_ascii_alphanumeric());
        let invalid = || Error::InvalidColor(hex.to_string());

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let n = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        let byte = |shift: u32| (n >> shift & 0xFF) as u8;

        match digits.len() {
            3 => {
                let nibble = |shift: u32| (n >> shift & 0xF) as u8 * 17;
                Ok(Color::rgb(nibble(8), nibble(4), nibble(0)))
            }
            6 => Ok(Color::rgb(byte(16), byte(8), byte(0))),
            8 => Ok(Color::rgba(byte(16), byte(8), byte(0), byte(24))),
            _ => Err(invalid()),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
        }
    }
}

#[cfg(feature = "image")]
impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}
