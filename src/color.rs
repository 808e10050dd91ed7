//! RGB565 colors as the ST7789V expects them in 16 bit interface mode

/// A packed 16 bit RGB565 color: 5 bits red, 6 bits green, 5 bits blue
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(pub u16);

impl Color {
    /// Black
    pub const BLACK: Color = Color(0x0000);
    /// Blue
    pub const BLUE: Color = Color(0x001F);
    /// Red
    pub const RED: Color = Color(0xF800);
    /// Green
    pub const GREEN: Color = Color(0x07E0);
    /// Cyan
    pub const CYAN: Color = Color(0x07FF);
    /// Magenta
    pub const MAGENTA: Color = Color(0xF81F);
    /// Yellow
    pub const YELLOW: Color = Color(0xFFE0);
    /// White
    pub const WHITE: Color = Color(0xFFFF);

    /// Pack 8 bit channels, dropping their low bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Color {
        let r = (r as u16 >> 3) << 11;
        let g = (g as u16 >> 2) << 5;
        let b = b as u16 >> 3;
        Color(r | g | b)
    }

    /// The two bytes sent per pixel, high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(value: u16) -> Self {
        Color(value)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

#[cfg(feature = "graphics")]
mod graphics {
    use super::Color;
    use embedded_graphics_core::pixelcolor::{raw::RawU16, IntoStorage, Rgb565};

    impl From<Rgb565> for Color {
        fn from(color: Rgb565) -> Self {
            Color(color.into_storage())
        }
    }

    impl From<Color> for Rgb565 {
        fn from(color: Color) -> Self {
            Rgb565::from(RawU16::new(color.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order() {
        assert_eq!(Color::RED.to_be_bytes(), [0xF8, 0x00]);
        assert_eq!(Color(0x1234).to_be_bytes(), [0x12, 0x34]);
    }

    #[test]
    fn from_rgb() {
        assert_eq!(Color::from_rgb(255, 0, 0), Color::RED);
        assert_eq!(Color::from_rgb(0, 255, 0), Color::GREEN);
        assert_eq!(Color::from_rgb(0, 0, 255), Color::BLUE);
        assert_eq!(Color::from_rgb(255, 255, 255), Color::WHITE);
        assert_eq!(Color::from_rgb(7, 3, 7), Color::BLACK);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn rgb565_conversion() {
        use embedded_graphics_core::pixelcolor::Rgb565;
        use embedded_graphics_core::prelude::*;

        assert_eq!(Color::from(Rgb565::RED), Color::RED);
        assert_eq!(Color::from(Rgb565::new(0, 63, 0)), Color::GREEN);
        assert_eq!(Rgb565::from(Color::CYAN), Rgb565::CYAN);
    }
}
