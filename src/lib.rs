//! # code128b
//!
//! Code 128 (subset B) encoder and renderer for e-invoice carrier barcodes.
//!
//! Text goes through [encode] to a [Pattern] of bar and space modules, which
//! [render] stretches over a raster of any size with two colors:
//!
//! ```rust
//! use code128b::{encode, render, Color};
//!
//! let pattern = encode("/ABC123").unwrap();
//! assert_eq!(pattern.len(), 112);
//!
//! let raster = render(&pattern, 400, 120, Color::BLACK, Color::WHITE).unwrap();
//! assert_eq!(raster.get(0, 0), Some(&Color::BLACK));
//! ```
//!
//! [compose] places the barcode on a themed canvas the way the Lock Screen
//! widget shows it. With the `embedded-graphics` feature a [Code128Render]
//! can be drawn on any `DrawTarget`, and with the `image` feature a raster
//! can be saved as PNG.
//!
//! The crate is `no_std` (with `alloc`) when the `std` feature is off.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitfield;
mod carrier;
mod color;
mod error;
mod pattern;
mod tables;

pub mod compose;
pub mod encoder;
pub mod render;

#[cfg(feature = "embedded-graphics")]
pub mod graphics;
#[cfg(feature = "image")]
mod output;

pub use bitfield::{Bitfield, Bits};
pub use carrier::CarrierNumber;
pub use color::Color;
pub use compose::{compose, compose_over, Theme, ThemedLayout};
pub use encoder::{checksum, encode, encoded_len, Code128Encoder};
pub use error::{Error, Result};
pub use pattern::Pattern;
pub use render::{render, Code128Render, Raster};
pub use tables::{START_B_PAT, STOP_PAT};

/// Number of modules of the barcode for a text of `$chars` characters.
/// Usable in const contexts to size buffers.
#[macro_export]
macro_rules! code128_len {
    ($chars:expr) => {
        11 * ($chars + 2) + 13
    };
}

/// Size in bytes of a packed bitmap (see [Code128Render::fill_bitmap])
/// of `$width` x `$height` pixels.
#[macro_export]
macro_rules! code128_bitmap_len {
    ($width:expr, $height:expr) => {
        ($width + 7) / 8 * $height
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_macro_matches_encoder() {
        const LEN: usize = code128_len!(7);
        assert_eq!(LEN, encoded_len(7));
        assert_eq!(encode("/ABC123").unwrap().len(), LEN);
    }

    #[test]
    fn test_bitmap_len_macro() {
        assert_eq!(code128_bitmap_len!(10, 2), 4);
        assert_eq!(code128_bitmap_len!(16, 3), 6);
    }

    #[test]
    fn test_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Pattern>();
        assert_send_sync::<Raster<Color>>();
        assert_send_sync::<Code128Render<'static>>();
        assert_send_sync::<Error>();
    }
}
