//! Seams between the driver, its commands and the bus

/// An entry of a controller's command table, identified by its one-byte opcode.
/// The opcode goes out with D/CX low; parameters follow as data.
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// The link between the driver and the panel controller
///
/// Every call is synchronous and blocking. [SpiInterface](crate::interface::SpiInterface)
/// implements it on top of `embedded-hal`, but any bus able to tell commands from data
/// (8080 parallel, a bit-banged 3-wire SPI, a simulator) can stand in.
pub trait Transport {
    /// Error reported by the underlying bus or pins
    type Error;

    /// Brings up the bus and hardware-resets the panel.
    ///
    /// Called once before the first command sequence, and again by
    /// [`St7789v::reset`](crate::st7789v::St7789v::reset).
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Issues one opcode as a command transaction
    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error>;

    /// Issues bytes as a data transaction following the most recent command
    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Reads back one 16 bit value, first received byte in the high half
    fn read_data(&mut self) -> Result<u16, Self::Error>;

    /// Issues a read opcode and reads back its 16 bit reply without releasing the bus
    /// in between, first received byte in the high half.
    fn read_register(&mut self, opcode: u8) -> Result<u16, Self::Error>;

    /// Blocks for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        T::init(self)
    }

    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        T::write_command(self, opcode)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        T::write_data(self, data)
    }

    fn read_data(&mut self) -> Result<u16, Self::Error> {
        T::read_data(self)
    }

    fn read_register(&mut self, opcode: u8) -> Result<u16, Self::Error> {
        T::read_register(self, opcode)
    }

    fn delay_ms(&mut self, ms: u32) -> Result<(), Self::Error> {
        T::delay_ms(self, ms)
    }
}
