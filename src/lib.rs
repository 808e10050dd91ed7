//! A simple Driver for ST7789V TFT LCD panels via SPI
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1.0.0
//!
//! The controller is driven with opcode + parameter commands. Fixed sequences, like the
//! power-up of the panel, are kept as static tables of
//! [CommandDescriptor](sequence::CommandDescriptor)s and played in order by the
//! [executor](sequence::run_commands). Drawing is limited to what the controller can do
//! without a host framebuffer: set an address window, then stream one color into it.
//!
//! # Requirements
//!
//! ### SPI
//!
//! - 4-line serial interface: SCL, SDA, CSX (handled by the [SpiDevice](embedded_hal::spi::SpiDevice)), D/CX
//! - SPI_MODE_0 is used (CPHA = 0, CPOL = 0)
//! - 8 bits per word, MSB first
//!
//! ### Other....
//!
//! - Pixels are RGB565, sent high byte first
//! - Any other bus can be used by implementing [Transport](traits::Transport)
//!
//! # Examples
//!
//! ```ignore
//! use st7789v::prelude::*;
//!
//! let interface = SpiInterface::new(spi, dc, rst, delay);
//! let mut display = St7789v::new(interface, Config::default());
//!
//! display.init()?;
//!
//! // a red 40x40 square
//! display.fill_area(Color::RED, 10, 20, 40, 40)?;
//!
//! display.clear(Color::BLACK)?;
//! ```
//!
//! # Features
//!
//! - `graphics` (default): `embedded-graphics` `DrawTarget` support
//! - `log` / `defmt`: driver logging through the matching crate
#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(feature = "graphics")]
pub mod graphics;

pub mod traits;

pub mod color;

pub mod error;

/// Interface for the physical connection between display and the controlling device
pub mod interface;

pub mod rect;

pub mod sequence;

pub mod st7789v;

mod log;

#[cfg(test)]
mod mock;

/// Includes everything important besides the chosen display
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::error::ErrorKind;
    pub use crate::interface::{InterfaceError, SpiInterface};
    pub use crate::rect::Window;
    pub use crate::sequence::{CommandDescriptor, SEQUENCE_END};
    pub use crate::st7789v::{Command, Config, St7789v, HEIGHT, WIDTH};
    pub use crate::traits::Transport;
    pub use crate::SPI_MODE;
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnFirstTransition,
    polarity: Polarity::IdleLow,
};
