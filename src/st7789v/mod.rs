//! A driver for 2" 240x320 TFT panels built on the Sitronix ST7789V
//!
//! The panel is brought up over the serial interface, then switched to take its pixel
//! stream from the RGB interface. Until then, and for anything drawn over SPI, the driver
//! offers address windows and solid fills straight into the controller's frame memory.
//! There is no framebuffer on the host side.
//!
//! # References
//!
//! - [Datasheet](https://www.newhavendisplay.com/appnotes/datasheets/LCDs/ST7789V.pdf)
//!
//! # Example
//!
//!```rust
//!use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
//!use st7789v::prelude::*;
//!
//!fn run<SPI, DC, RST, D>(
//!    spi: SPI,
//!    dc: DC,
//!    rst: RST,
//!    delay: D,
//!) -> Result<(), ErrorKind<<SpiInterface<SPI, DC, RST, D> as Transport>::Error>>
//!where
//!    SPI: SpiDevice,
//!    DC: OutputPin,
//!    RST: OutputPin,
//!    D: DelayNs,
//!{
//!    let interface = SpiInterface::new(spi, dc, rst, delay);
//!    let mut display = St7789v::new(interface, Config::default());
//!
//!    display.init()?;
//!    display.fill_area(Color::RED, 10, 20, 40, 40)?;
//!    display.clear(Color::WHITE)
//!}
//!```

use bit_field::BitField;

use crate::color::Color;
use crate::error::ErrorKind;
use crate::log::debug;
use crate::rect::Window;
use crate::sequence::{self, CommandDescriptor, MAX_PAYLOAD_LEN};
use crate::traits::{Command as CommandTrait, Transport};

pub(crate) mod command;
pub use self::command::Command;

mod config;
pub use self::config::Config;

mod constants;
pub use self::constants::{OUTPUT_ENABLE, PANEL_SETUP};

/// Width of the display
pub const WIDTH: u16 = 240;
/// Height of the display
pub const HEIGHT: u16 = 320;

/// Pixels per data write while filling
const FILL_CHUNK_PIXELS: usize = MAX_PAYLOAD_LEN / 2;

/// Display power mode, as reported by [Command::RDDPM]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerMode {
    /// Booster voltage is on
    pub booster_on: bool,
    /// Idle mode (8 colors)
    pub idle: bool,
    /// Partial display mode
    pub partial: bool,
    /// Out of sleep
    pub sleep_out: bool,
    /// Normal display mode
    pub normal: bool,
    /// Output enabled
    pub display_on: bool,
}

impl From<u8> for PowerMode {
    fn from(value: u8) -> Self {
        PowerMode {
            booster_on: value.get_bit(7),
            idle: value.get_bit(6),
            partial: value.get_bit(5),
            sleep_out: value.get_bit(4),
            normal: value.get_bit(3),
            display_on: value.get_bit(2),
        }
    }
}

/// St7789v driver
///
/// Owns the [Transport]; one handle drives one panel.
pub struct St7789v<T> {
    /// Connection Interface
    transport: T,
    config: Config,
    /// Last window set on the controller, if known
    window: Option<Window>,
}

impl<T> St7789v<T>
where
    T: Transport,
{
    /// Creates a new driver. Nothing is sent until [init](St7789v::init).
    pub fn new(transport: T, config: Config) -> Self {
        St7789v {
            transport,
            config,
            window: None,
        }
    }

    /// Brings the panel from power-on to displaying, ready for the RGB interface.
    ///
    /// Resets the controller, runs [PANEL_SETUP], clears the frame memory to
    /// [Config::clear_color] so no garbage shows once the output is on, then runs
    /// [OUTPUT_ENABLE].
    pub fn init(&mut self) -> Result<(), ErrorKind<T::Error>> {
        debug!("Initialising display");
        self.reset()?;

        self.run_commands(PANEL_SETUP)?;
        if self.config.settle_delay_ms > 0 {
            self.transport.delay_ms(self.config.settle_delay_ms)?;
        }

        debug!("Clearing frame memory");
        self.clear(self.config.clear_color)?;

        debug!("Enabling output");
        self.run_commands(OUTPUT_ENABLE)
    }

    /// Hardware reset. The controller comes back asleep with its defaults loaded.
    pub fn reset(&mut self) -> Result<(), ErrorKind<T::Error>> {
        debug!("Resetting display");
        self.window = None;
        self.transport.init()?;
        Ok(())
    }

    /// Turns the output on
    pub fn display_on(&mut self) -> Result<(), ErrorKind<T::Error>> {
        self.command(Command::DISPON)
    }

    /// Turns the output off. Frame memory is kept.
    pub fn display_off(&mut self) -> Result<(), ErrorKind<T::Error>> {
        self.command(Command::DISPOFF)
    }

    /// Enters sleep mode
    pub fn sleep(&mut self) -> Result<(), ErrorKind<T::Error>> {
        debug!("Sleeping display");
        self.run_command(&CommandDescriptor::bare(Command::SLPIN, 5))
    }

    /// Leaves sleep mode, waiting out the 120ms the controller needs
    pub fn wake_up(&mut self) -> Result<(), ErrorKind<T::Error>> {
        debug!("Waking display");
        self.run_command(&CommandDescriptor::bare(Command::SLPOUT, 120))
    }

    /// Switches display inversion on or off
    pub fn set_inversion(&mut self, inverted: bool) -> Result<(), ErrorKind<T::Error>> {
        if inverted {
            self.command(Command::INVON)
        } else {
            self.command(Command::INVOFF)
        }
    }

    /// Sends a read command and returns the two bytes that follow
    pub fn read_register(&mut self, command: Command) -> Result<u16, ErrorKind<T::Error>> {
        Ok(self.transport.read_register(command.address())?)
    }

    /// Reads the power mode register
    pub fn power_mode(&mut self) -> Result<PowerMode, ErrorKind<T::Error>> {
        let [mode, _] = self.read_register(Command::RDDPM)?.to_be_bytes();
        Ok(PowerMode::from(mode))
    }

    /// Sends one command with its parameters and waits out its delay
    pub fn run_command(&mut self, command: &CommandDescriptor<'_>) -> Result<(), ErrorKind<T::Error>> {
        self.track_window(core::slice::from_ref(command));
        sequence::run_command(&mut self.transport, command)
    }

    /// Runs a command sequence up to its terminator
    pub fn run_commands(
        &mut self,
        sequence: &[CommandDescriptor<'_>],
    ) -> Result<(), ErrorKind<T::Error>> {
        self.track_window(sequence);
        sequence::run_commands(&mut self.transport, sequence)
    }

    /// Sets the frame memory window for the pixels that follow and starts a memory write.
    ///
    /// Coordinates are inclusive. Pixels then fill the window row by row, left to right.
    /// A window that is reversed or leaves the panel is rejected before anything is sent.
    pub fn set_window(
        &mut self,
        x_start: u16,
        y_start: u16,
        x_end: u16,
        y_end: u16,
    ) -> Result<(), ErrorKind<T::Error>> {
        let window = Window::new(x_start, y_start, x_end, y_end);
        if !window.fits(WIDTH, HEIGHT) {
            return Err(ErrorKind::InvalidRegion);
        }
        self.address(window)
    }

    /// Fills `width` x `height` pixels from `(x, y)` with `color`
    pub fn fill_area(
        &mut self,
        color: Color,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    ) -> Result<(), ErrorKind<T::Error>> {
        let window = Window::from_area(x, y, width, height)
            .filter(|window| window.fits(WIDTH, HEIGHT))
            .ok_or(ErrorKind::InvalidRegion)?;

        self.address(window)?;
        self.write_pixels(color, window.pixel_count())
    }

    /// Fills the whole panel with `color`
    pub fn clear(&mut self, color: Color) -> Result<(), ErrorKind<T::Error>> {
        self.fill_area(color, 0, 0, WIDTH, HEIGHT)
    }

    /// Last window set through this driver, `None` after a reset or raw addressing commands
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    /// Get the width of the display
    pub fn width(&self) -> u16 {
        WIDTH
    }

    /// Get the height of the display
    pub fn height(&self) -> u16 {
        HEIGHT
    }

    /// Get the configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consumes the driver, handing back the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Forgets the cached window if `sequence` moves or resets it on the controller
    fn track_window(&mut self, sequence: &[CommandDescriptor<'_>]) {
        let moves_window = sequence
            .iter()
            .take_while(|command| !command.is_end())
            .any(|command| {
                [Command::CASET, Command::RASET, Command::SWRESET]
                    .iter()
                    .any(|c| c.address() == command.opcode())
            });
        if moves_window {
            self.window = None;
        }
    }

    fn command(&mut self, command: Command) -> Result<(), ErrorKind<T::Error>> {
        self.run_command(&CommandDescriptor::bare(command, 0))
    }

    fn address(&mut self, window: Window) -> Result<(), ErrorKind<T::Error>> {
        let columns = window.column_payload();
        let rows = window.row_payload();

        self.run_commands(&[
            CommandDescriptor::new(Command::CASET, 0, &columns),
            CommandDescriptor::new(Command::RASET, 0, &rows),
            CommandDescriptor::end(),
        ])?;
        self.window = Some(window);
        self.command(Command::RAMWR)
    }

    fn write_pixels(&mut self, color: Color, count: u32) -> Result<(), ErrorKind<T::Error>> {
        let mut buffer = [0u8; FILL_CHUNK_PIXELS * 2];
        for pixel in buffer.chunks_exact_mut(2) {
            pixel.copy_from_slice(&color.to_be_bytes());
        }

        let mut remaining = count as usize;
        while remaining > 0 {
            let pixels = remaining.min(FILL_CHUNK_PIXELS);
            self.transport.write_data(&buffer[..pixels * 2])?;
            remaining -= pixels;
        }
        Ok(())
    }
}
