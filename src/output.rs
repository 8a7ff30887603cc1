//! Raster export through the `image` crate.

use std::path::Path;

use image::RgbaImage;

use crate::{render::Raster, Color, Result};

impl Raster<Color> {
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            self.get(x, y).copied().unwrap_or(Color::rgba(0, 0, 0, 0)).into()
        })
    }

    /// Writes the raster as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!("saving {}x{} barcode to {}", self.width(), self.height(), path.display());
        self.to_rgba_image().save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{encode, render, Color};

    #[test]
    fn test_to_rgba_image() {
        let pattern = encode("/ABC123").unwrap();
        let raster = render(&pattern, 224, 20, Color::rgb(0x4A, 0x14, 0x8C), Color::WHITE).unwrap();
        let img = raster.to_rgba_image();
        assert_eq!(img.dimensions(), (224, 20));
        assert_eq!(img.get_pixel(0, 0), &image::Rgba([0x4A, 0x14, 0x8C, 0xFF]));
        // third module of Start B is a space
        assert_eq!(img.get_pixel(4, 19), &image::Rgba([0xFF, 0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn test_save_png() {
        let dir = std::env::temp_dir().join(format!("code128b-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("carrier.png");

        let pattern = encode("/ABC123").unwrap();
        render(&pattern, 112, 10, Color::BLACK, Color::WHITE).unwrap().save_png(&path).unwrap();

        let loaded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(loaded.dimensions(), (112, 10));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
