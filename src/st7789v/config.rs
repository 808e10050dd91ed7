use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// Driver configuration
pub struct Config {
    /// Color written to the whole frame memory during [init](super::St7789v::init),
    /// before the output is switched on.
    pub clear_color: Color,
    /// Milliseconds to wait between the panel setup and that first clear.
    pub settle_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            settle_delay_ms: 10,
        }
    }
}
