//! Barcode centered on a themed background, as shown on the Lock Screen.

use crate::render::{Code128Render, Raster};
use crate::{CarrierNumber, Color, Error, Result};

/// Colors of a themed barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Canvas behind the barcode.
    pub background: Color,
    /// Bar modules.
    pub bar: Color,
    /// Space modules, i.e. the barcode's own background.
    pub bar_background: Color,
}

impl Theme {
    /// System yellow at 30% opacity.
    pub const FALLBACK_BACKGROUND: Color = Color::rgba(0xFF, 0xCC, 0x00, 0x4D);

    /// Builds a theme from optional hex colors, falling back to the
    /// defaults for the missing ones.
    pub fn from_hex(background: Option<&str>, bar: Option<&str>, bar_background: Option<&str>) -> Result<Self> {
        let default = Self::default();
        let parse = |hex: Option<&str>, fallback| hex.map_or(Ok(fallback), Color::from_hex);
        Ok(Self {
            background: parse(background, default.background)?,
            bar: parse(bar, default.bar)?,
            bar_background: parse(bar_background, default.bar_background)?,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Self::FALLBACK_BACKGROUND,
            bar: Color::BLACK,
            bar_background: Color::WHITE,
        }
    }
}

/// Where the barcode goes on a canvas: 3/5 of the canvas height, at most
/// three times as wide as tall and 4/5 of the canvas width, centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemedLayout {
    pub canvas: (u32, u32),
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ThemedLayout {
    pub const DEFAULT_SIZE: (u32, u32) = (300, 100);
    const ASPECT_RATIO: u32 = 3;

    pub const fn new(canvas_width: u32, canvas_height: u32) -> Self {
        let height = (canvas_height as u64 * 3 / 5) as u32;
        let max_width = (canvas_width as u64 * 4 / 5) as u32;
        let wanted = height.saturating_mul(Self::ASPECT_RATIO);
        let width = if wanted < max_width { wanted } else { max_width };
        Self {
            canvas: (canvas_width, canvas_height),
            x: (canvas_width - width) / 2,
            y: (canvas_height - height) / 2,
            width,
            height,
        }
    }

    /// Whether the canvas is too small to hold any barcode pixel.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for ThemedLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE.0, Self::DEFAULT_SIZE.1)
    }
}

/// Renders `carrier` on a `size` canvas painted with `theme`.
pub fn compose(carrier: &CarrierNumber, size: (u32, u32), theme: &Theme) -> Result<Raster<Color>> {
    compose_over(carrier, size, theme, None)
}

/// Same as [compose] with an optional `overlay` (a theme's background
/// artwork) stretched over the canvas between the background color and the
/// barcode. Every layer is blended source-over, so translucent theme colors
/// show what lies beneath.
pub fn compose_over(
    carrier: &CarrierNumber,
    size: (u32, u32),
    theme: &Theme,
    overlay: Option<&Raster<Color>>,
) -> Result<Raster<Color>> {
    let (width, height) = size;
    if width == 0 || height == 0 {
        return Err(Error::InvalidSize { width, height });
    }
    let layout = ThemedLayout::new(width, height);
    tracing::debug!("composing {carrier} at {width}x{height} into {layout:?}");

    let pattern = carrier.encode()?;
    let mut canvas = Raster::new(width, height, theme.background);

    if let Some(overlay) = overlay {
        canvas.draw_over(&overlay.resized(width, height), 0, 0);
    }

    if layout.is_empty() {
        tracing::debug!("canvas {width}x{height} too small for a barcode");
        return Ok(canvas);
    }
    let barcode = Code128Render::new(&pattern)
        .set_size((layout.width, layout.height))
        .to_raster(theme.bar, theme.bar_background)?;
    canvas.draw_over(&barcode, layout.x, layout.y);
    Ok(canvas)
}

/// Same as [compose] from raw text; empty text is rejected.
pub fn compose_text(text: &str, size: (u32, u32), theme: &Theme) -> Result<Raster<Color>> {
    compose(&CarrierNumber::parse(text)?, size, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout() {
        let layout = ThemedLayout::default();
        assert_eq!((layout.x, layout.y, layout.width, layout.height), (60, 20, 180, 60));
    }

    #[test]
    fn test_wide_canvas_is_height_bound() {
        let layout = ThemedLayout::new(1000, 100);
        assert_eq!((layout.width, layout.height), (180, 60));
        assert_eq!(layout.x, 410);
    }

    #[test]
    fn test_tall_canvas_is_width_bound() {
        let layout = ThemedLayout::new(100, 400);
        assert_eq!((layout.width, layout.height), (80, 240));
        assert_eq!((layout.x, layout.y), (10, 80));
    }

    #[test]
    fn test_theme_from_hex() {
        let theme = Theme::from_hex(Some("#FFE135"), Some("#8B4513"), None).unwrap();
        assert_eq!(theme.background, Color::rgb(0xFF, 0xE1, 0x35));
        assert_eq!(theme.bar, Color::rgb(0x8B, 0x45, 0x13));
        assert_eq!(theme.bar_background, Color::WHITE);
        assert!(Theme::from_hex(None, Some("nope"), None).is_err());
    }

    #[test]
    fn test_compose() {
        let theme = Theme::from_hex(Some("#F5F5F5"), Some("#000"), Some("#FFF")).unwrap();
        let carrier = CarrierNumber::parse("/ABC123").unwrap();
        let canvas = compose(&carrier, (300, 100), &theme).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (300, 100));

        // outside the barcode rectangle
        assert_eq!(canvas.get(0, 0), Some(&theme.background));
        assert_eq!(canvas.get(59, 50), Some(&theme.background));
        assert_eq!(canvas.get(150, 19), Some(&theme.background));

        // barcode row matches a direct render at the layout size
        let pattern = encode("/ABC123").unwrap();
        let barcode = crate::render(&pattern, 180, 60, theme.bar, theme.bar_background).unwrap();
        assert_eq!(&canvas.row(20).unwrap()[60..240], barcode.row(0).unwrap());
        // Start B begins with a bar
        assert_eq!(canvas.get(60, 79), Some(&theme.bar));
        assert_eq!(canvas.get(60, 80), Some(&theme.background));
    }

    #[test]
    fn test_huge_canvas_does_not_overflow() {
        let layout = ThemedLayout::new(u32::MAX, u32::MAX);
        assert_eq!(layout.height, (u32::MAX as u64 * 3 / 5) as u32);
        assert_eq!(layout.width, (u32::MAX as u64 * 4 / 5) as u32);
    }

    #[test]
    fn test_compose_flat_canvas_is_background_only() {
        let carrier = CarrierNumber::parse("/ABC123").unwrap();
        let theme = Theme::default();
        let canvas = compose(&carrier, (300, 1), &theme).unwrap();
        assert_eq!(canvas, Raster::new(300, 1, theme.background));
        assert_eq!(compose(&carrier, (0, 10), &theme), Err(Error::InvalidSize { width: 0, height: 10 }));
    }

    #[test]
    fn test_compose_blends_translucent_bar_background() {
        let theme = Theme::from_hex(Some("#000000"), Some("#000000"), Some("#80FFFFFF")).unwrap();
        let carrier = CarrierNumber::parse("/ABC123").unwrap();
        let canvas = compose(&carrier, (300, 100), &theme).unwrap();

        // third module of Start B is a space: half white over black
        let layout = ThemedLayout::default();
        let space_x = layout.x + layout.width * 2 / 112 + 1;
        assert_eq!(canvas.get(space_x, 50), Some(&Color::rgb(0x80, 0x80, 0x80)));
        assert!(canvas.pixels().iter().all(Color::is_opaque));
    }

    #[test]
    fn test_compose_overlay_sits_between_layers() {
        let theme = Theme::from_hex(Some("#0000FF"), Some("#000"), Some("#FFF")).unwrap();
        let carrier = CarrierNumber::parse("/ABC123").unwrap();
        let artwork = Raster::new(3, 1, Color::rgba(0xFF, 0, 0, 0x80));
        let canvas = compose_over(&carrier, (300, 100), &theme, Some(&artwork)).unwrap();

        // artwork blended over the background outside the barcode
        assert_eq!(canvas.get(0, 0), Some(&Color::rgb(0x80, 0, 0x7F)));
        assert_eq!(canvas.get(299, 99), Some(&Color::rgb(0x80, 0, 0x7F)));
        // opaque barcode covers the artwork
        assert_eq!(canvas.get(60, 20), Some(&theme.bar));
    }

    #[test]
    fn test_compose_rejects_empty() {
        assert_eq!(compose_text("  ", (300, 100), &Theme::default()), Err(Error::EmptyText));
    }
}
