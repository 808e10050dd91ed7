//! Graphics Support for the ST7789V
//!
//! Draws straight into the controller's frame memory: every pixel costs a window set
//! plus one word, while [fill_solid](DrawTarget::fill_solid) and
//! [clear](DrawTarget::clear) become a single [fill_area](St7789v::fill_area).

use embedded_graphics_core::pixelcolor::Rgb565;
use embedded_graphics_core::prelude::*;
use embedded_graphics_core::primitives::Rectangle;

use crate::error::ErrorKind;
use crate::st7789v::{St7789v, HEIGHT, WIDTH};
use crate::traits::Transport;

/// For use with embedded_graphics
impl<T> DrawTarget for St7789v<T>
where
    T: Transport,
{
    type Color = Rgb565;
    type Error = ErrorKind<T::Error>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.fill_area(color.into(), point.x as u16, point.y as u16, 1, 1)?;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.is_zero_sized() {
            return Ok(());
        }
        self.fill_area(
            color.into(),
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
        )
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        St7789v::clear(self, color.into())
    }
}

/// For use with embedded_graphics
impl<T> OriginDimensions for St7789v<T> {
    fn size(&self) -> Size {
        Size::new(WIDTH.into(), HEIGHT.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::mock::{Event, Recorder};
    use crate::rect::Window;
    use crate::st7789v::Config;
    use embedded_graphics::{
        primitives::{Line, Primitive, PrimitiveStyle},
        Drawable,
    };
    use std::vec;

    fn display() -> St7789v<Recorder> {
        St7789v::new(Recorder::default(), Config::default())
    }

    #[test]
    fn size() {
        assert_eq!(display().size(), Size::new(240, 320));
    }

    #[test]
    fn fill_solid_is_clipped() {
        let mut display = display();
        Rectangle::new(Point::new(230, -5), Size::new(20, 10))
            .into_styled(PrimitiveStyle::with_fill(Rgb565::GREEN))
            .draw(&mut display)
            .unwrap();

        assert_eq!(display.window(), Some(Window::new(230, 0, 239, 4)));
        let stream = display.release().data_stream();
        assert_eq!(stream.len(), 8 + 10 * 5 * 2);
        assert!(stream[8..].chunks(2).all(|p| p == Color::GREEN.to_be_bytes()));
    }

    #[test]
    fn offscreen_fill_sends_nothing() {
        let mut display = display();
        display
            .fill_solid(
                &Rectangle::new(Point::new(300, 400), Size::new(5, 5)),
                Rgb565::RED,
            )
            .unwrap();
        assert!(display.release().events.is_empty());
    }

    #[test]
    fn pixels_outside_are_skipped() {
        let mut display = display();
        Line::new(Point::new(-1, 0), Point::new(1, 0))
            .into_styled(PrimitiveStyle::with_stroke(Rgb565::BLUE, 1))
            .draw(&mut display)
            .unwrap();

        let rec = display.release();
        assert_eq!(rec.commands(), vec![0x2a, 0x2b, 0x2c, 0x2a, 0x2b, 0x2c]);
        assert_eq!(rec.events[5], Event::Data(vec![0x00, 0x1f]));
    }

    #[test]
    fn clear_fills_the_panel() {
        let mut display = display();
        DrawTarget::clear(&mut display, Rgb565::WHITE).unwrap();
        assert_eq!(display.window(), Some(Window::new(0, 0, 239, 319)));
    }
}
