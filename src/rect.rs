//! Address windows on the panel's frame memory

/// An inclusive rectangle of panel pixels, as set by CASET/RASET
///
/// All four coordinates are zero based and inclusive, so a single pixel at
/// `(x, y)` is `Window::new(x, y, x, y)`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    /// First column
    pub x_start: u16,
    /// First row
    pub y_start: u16,
    /// Last column
    pub x_end: u16,
    /// Last row
    pub y_end: u16,
}

impl Window {
    /// Construct a window from its corners
    pub const fn new(x_start: u16, y_start: u16, x_end: u16, y_end: u16) -> Window {
        Window {
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// Window covering `width` x `height` pixels from `(x, y)`
    ///
    /// Returns `None` for an empty area or one whose far corner doesn't fit in `u16`.
    pub fn from_area(x: u16, y: u16, width: u16, height: u16) -> Option<Window> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Window {
            x_start: x,
            y_start: y,
            x_end: x.checked_add(width - 1)?,
            y_end: y.checked_add(height - 1)?,
        })
    }

    /// Number of columns
    pub fn width(&self) -> u32 {
        u32::from(self.x_end) - u32::from(self.x_start) + 1
    }

    /// Number of rows
    pub fn height(&self) -> u32 {
        u32::from(self.y_end) - u32::from(self.y_start) + 1
    }

    /// Number of pixels the controller expects before the window is full
    pub fn pixel_count(&self) -> u32 {
        self.width() * self.height()
    }

    /// Test whether the window is well formed and lies on a `width` x `height` panel.
    pub fn fits(&self, width: u16, height: u16) -> bool {
        self.x_start <= self.x_end
            && self.y_start <= self.y_end
            && self.x_end < width
            && self.y_end < height
    }

    /// CASET parameters: start and end column, big endian
    pub const fn column_payload(&self) -> [u8; 4] {
        span(self.x_start, self.x_end)
    }

    /// RASET parameters: start and end row, big endian
    pub const fn row_payload(&self) -> [u8; 4] {
        span(self.y_start, self.y_end)
    }
}

const fn span(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}

#[test]
fn test_payloads() {
    let w = Window::new(10, 20, 49, 59);
    assert_eq!(w.column_payload(), [0x00, 0x0A, 0x00, 0x31]);
    assert_eq!(w.row_payload(), [0x00, 0x14, 0x00, 0x3B]);

    let w = Window::new(0, 0, 239, 319);
    assert_eq!(w.column_payload(), [0x00, 0x00, 0x00, 0xEF]);
    assert_eq!(w.row_payload(), [0x00, 0x00, 0x01, 0x3F]);
}

#[test]
fn test_from_area() {
    assert_eq!(Window::from_area(5, 6, 2, 3), Some(Window::new(5, 6, 6, 8)));
    assert_eq!(Window::from_area(5, 6, 0, 3), None);
    assert_eq!(Window::from_area(5, 6, 2, 0), None);
    assert_eq!(Window::from_area(u16::MAX, 0, 2, 1), None);

    let w = Window::from_area(0, 0, 240, 320).unwrap();
    assert_eq!(w.pixel_count(), 240 * 320);
}

#[test]
fn test_fits() {
    assert!(Window::new(0, 0, 239, 319).fits(240, 320));
    assert!(Window::new(7, 7, 7, 7).fits(240, 320));
    assert!(!Window::new(0, 0, 240, 319).fits(240, 320));
    assert!(!Window::new(0, 0, 239, 320).fits(240, 320));
    assert!(!Window::new(10, 0, 9, 5).fits(240, 320));
}
