//! Module pattern to fixed-size raster.
//!
//! The canvas is split into as many equal-width columns as the pattern has
//! modules; no quiet zone is added. A pixel column belongs to the module
//! whose span contains the pixel center, so a module is `width / len`
//! pixels wide on average and the result never depends on float rounding.

use alloc::vec::Vec;
use core::iter;

use crate::{Color, Error, Pattern, Result};

#[derive(Debug, Clone)]
pub struct Code128Render<'a> {
    pattern: &'a Pattern,
    size: (u32, u32),
    inverted: bool,
}

impl<'a> From<&'a Pattern> for Code128Render<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        Self::new(pattern)
    }
}

impl<'a> Code128Render<'a> {
    /// Renders one pixel per module on a single row until a size is set.
    pub fn new(pattern: &'a Pattern) -> Self {
        Self { pattern, size: (pattern.len() as u32, 1), inverted: false }
    }

    pub const fn width(&self) -> u32 {
        self.size.0
    }

    pub const fn height(&self) -> u32 {
        self.size.1
    }

    /// Returns the output size as (width, height) in pixels.
    pub const fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Sets the output size in pixels. The pattern is stretched to fill it.
    pub const fn set_size(mut self, size: (u32, u32)) -> Self {
        self.size = size;
        self
    }

    /// Returns if the barcode is set to be rendered with inverted colors.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Marks whether bars and spaces should be swapped.
    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn pattern(&self) -> &'a Pattern {
        self.pattern
    }

    /// Whether pixel column `x` is covered by a bar (before inversion).
    pub fn is_bar_column(&self, x: u32) -> bool {
        let modules = self.pattern.modules();
        let width = self.size.0 as u64;
        if modules.is_empty() || x as u64 >= width {
            return false;
        }

        let index = (2 * x as u64 + 1) * modules.len() as u64 / (2 * width);
        modules[index as usize]
    }

    /// One entry per pixel column, `true` where the bar color goes.
    pub fn columns(&self) -> impl Iterator<Item = bool> + '_ {
        let invert = self.inverted;
        (0..self.size.0).map(move |x| self.is_bar_column(x) ^ invert)
    }

    /// Runs of consecutive `true` columns as (first column, run width).
    pub fn runs(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let mut columns = self.columns().chain(iter::once(false)).enumerate();
        let mut start = None;
        iter::from_fn(move || {
            for (x, on) in columns.by_ref() {
                let x = x as u32;
                match (on, start) {
                    (true, None) => start = Some(x),
                    (false, Some(s)) => {
                        start = None;
                        return Some((s, x - s));
                    }
                    _ => (),
                }
            }
            None
        })
    }

    /// Row-major pixel values, `true` where the bar color goes.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        let row: Vec<bool> = self.columns().collect();
        (0..self.size.1).flat_map(move |_| row.clone())
    }

    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        for (pixel, bit) in target.iter_mut().zip(self.bits()) {
            *pixel = if bit { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }

    /// Packs pixels 8 per byte, most significant bit first. Each row starts
    /// on a byte boundary, so `target` needs `(width + 7) / 8 * height` bytes.
    pub fn fill_bitmap(&self, target: &mut [u8]) {
        let stride = (self.size.0 as usize).div_ceil(8);
        if stride == 0 {
            return;
        }
        let row: Vec<bool> = self.columns().collect();
        for line in target.chunks_exact_mut(stride).take(self.size.1 as usize) {
            line.fill(0);
            for (x, _) in row.iter().enumerate().filter(|&(_, &on)| on) {
                line[x / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    /// Builds a raster with `bar` on every bar pixel and `background`
    /// everywhere else.
    pub fn to_raster<P: Clone>(&self, bar: P, background: P) -> Result<Raster<P>> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize { width, height });
        }
        tracing::debug!("rendering {} modules at {width}x{height}", self.pattern.len());

        let mut raster = Raster::new(width, height, background.clone());
        self.fill(&mut raster.pixels, &bar, &background);
        Ok(raster)
    }
}

/// Renders `pattern` stretched over a `width` x `height` canvas.
pub fn render<P: Clone>(pattern: &Pattern, width: u32, height: u32, bar: P, background: P) -> Result<Raster<P>> {
    Code128Render::new(pattern)
        .set_size((width, height))
        .to_raster(bar, background)
}

/// A row-major pixel buffer owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<P> {
    width: u32,
    height: u32,
    pixels: Vec<P>,
}

impl<P: Clone> Raster<P> {
    /// A `width` x `height` raster filled with `fill`.
    pub fn new(width: u32, height: u32, fill: P) -> Self {
        let pixels = alloc::vec![fill; width as usize * height as usize];
        Self { width, height, pixels }
    }

    /// Fills the rectangle at (`x`, `y`), clipped to the raster.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: &P) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for row in y.min(y_end)..y_end {
            let start = (row * self.width) as usize;
            self.pixels[start + x.min(x_end) as usize..start + x_end as usize].fill(color.clone());
        }
    }

    /// Copies `other` with its top-left corner at (`x`, `y`), clipped.
    pub fn blit(&mut self, other: &Raster<P>, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let w = other.width.min(self.width.saturating_sub(x)) as usize;
        let h = other.height.min(self.height.saturating_sub(y));
        for row in 0..h {
            let dst = ((y + row) * self.width + x) as usize;
            let src = (row * other.width) as usize;
            self.pixels[dst..dst + w].clone_from_slice(&other.pixels[src..src + w]);
        }
    }
}

impl Raster<Color> {
    /// Composites `other` over this raster with its top-left corner at
    /// (`x`, `y`), clipped, using source-over blending.
    pub fn draw_over(&mut self, other: &Raster<Color>, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let w = other.width.min(self.width - x) as usize;
        let h = other.height.min(self.height - y);
        for row in 0..h {
            let dst = ((y + row) * self.width + x) as usize;
            let src = (row * other.width) as usize;
            for (d, s) in self.pixels[dst..dst + w].iter_mut().zip(&other.pixels[src..src + w]) {
                *d = s.over(*d);
            }
        }
    }

    /// Nearest-neighbor resample to `width` x `height`.
    pub fn resized(&self, width: u32, height: u32) -> Raster<Color> {
        let mut out = Raster::new(width, height, Color::TRANSPARENT);
        if self.width == 0 || self.height == 0 {
            return out;
        }
        for y in 0..height {
            let sy = (y as u64 * self.height as u64 / height as u64) as u32;
            for x in 0..width {
                let sx = (x as u64 * self.width as u64 / width as u64) as u32;
                out.pixels[(y * width + x) as usize] = self.pixels[(sy * self.width + sx) as usize];
            }
        }
        out
    }
}

impl<P> Raster<P> {
    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        if x < self.width && y < self.height {
            self.pixels.get((y * self.width + x) as usize)
        } else {
            None
        }
    }

    pub fn row(&self, y: u32) -> Option<&[P]> {
        let start = (y as usize).checked_mul(self.width as usize)?;
        self.pixels.get(start..start + self.width as usize)
    }

    pub fn pixels(&self) -> &[P] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<P> {
        self.pixels
    }
}
