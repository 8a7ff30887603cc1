//! [embedded-graphics](embedded_graphics) support.

use embedded_graphics::{prelude::*, primitives::Rectangle};

use crate::render::Code128Render;

/// A rendered barcode that can be drawn on any [DrawTarget].
#[derive(Debug, Clone)]
pub struct Barcode<'a, C> {
    render: Code128Render<'a>,
    bar: C,
    background: C,
    position: Point,
}

impl<'a, C: PixelColor> Barcode<'a, C> {
    pub fn new(render: Code128Render<'a>, bar: C, background: C) -> Self {
        Self { render, bar, background, position: Point::zero() }
    }

    /// Moves the top-left corner of the barcode.
    pub fn at(mut self, position: Point) -> Self {
        self.position = position;
        self
    }
}

impl<C: PixelColor> Dimensions for Barcode<'_, C> {
    fn bounding_box(&self) -> Rectangle {
        let (width, height) = self.render.size();
        Rectangle::new(self.position, Size::new(width, height))
    }
}

impl<C: PixelColor> Drawable for Barcode<'_, C> {
    type Color = C;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let height = self.render.height();
        target.fill_solid(&self.bounding_box(), self.background)?;
        for (x, width) in self.render.runs() {
            let area = Rectangle::new(self.position + Point::new(x as i32, 0), Size::new(width, height));
            target.fill_solid(&area, self.bar)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pattern;
    use embedded_graphics::{mock_display::MockDisplay, pixelcolor::BinaryColor};

    #[test]
    fn test_draw() {
        let pattern: Pattern = "1001".parse().unwrap();
        let render = Code128Render::new(&pattern).set_size((8, 2));

        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        Barcode::new(render, BinaryColor::On, BinaryColor::Off)
            .at(Point::new(1, 1))
            .draw(&mut display)
            .unwrap();

        display.assert_pattern(&[
            "         ",
            " ##....##",
            " ##....##",
        ]);
    }

    #[test]
    fn test_bounding_box() {
        let pattern: Pattern = "10".parse().unwrap();
        let barcode = Barcode::new(Code128Render::new(&pattern).set_size((40, 10)), BinaryColor::On, BinaryColor::Off);
        assert_eq!(barcode.bounding_box(), Rectangle::new(Point::zero(), Size::new(40, 10)));
    }
}
