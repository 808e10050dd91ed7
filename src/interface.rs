use core::fmt::{Debug, Display, Formatter};

use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
    spi::{Operation, SpiDevice},
};

use crate::traits::Transport;

/// Error of the [SpiInterface]
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy)]
pub enum InterfaceError<SpiE, DcE, RstE> {
    /// Encountered an SPI error
    SpiError(SpiE),

    /// Encountered an error on DC GPIO
    DcError(DcE),

    /// Encountered an error on RST GPIO
    RstError(RstE),
}

impl<SpiE, DcE, RstE> Display for InterfaceError<SpiE, DcE, RstE>
where
    SpiE: Debug,
    DcE: Debug,
    RstE: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => write!(f, "SPI error: {err:?}"),
            Self::DcError(err) => write!(f, "DC pin error: {err:?}"),
            Self::RstError(err) => write!(f, "RST pin error: {err:?}"),
        }
    }
}

impl<SpiE, DcE, RstE> Debug for InterfaceError<SpiE, DcE, RstE>
where
    SpiE: Debug,
    DcE: Debug,
    RstE: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => f.debug_tuple("SpiError").field(err).finish(),
            Self::DcError(err) => f.debug_tuple("DcError").field(err).finish(),
            Self::RstError(err) => f.debug_tuple("RstError").field(err).finish(),
        }
    }
}

type SpiInterfaceError<SPI, DC, RST> = InterfaceError<
    <SPI as embedded_hal::spi::ErrorType>::Error,
    <DC as embedded_hal::digital::ErrorType>::Error,
    <RST as embedded_hal::digital::ErrorType>::Error,
>;

/// The 4-line serial connection of the ST7789V
///
/// Chip select is handled by the [SpiDevice], the D/CX line by `dc`
/// (low for commands, high for data) and the RESX line by `rst`.
pub struct SpiInterface<SPI, DC, RST, DELAY> {
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Resetting
    rst: RST,
    delay: DELAY,
}

/// How long RESX is held low
const RESET_PULSE_MS: u32 = 10;
/// The controller ignores commands for up to 120ms after RESX goes high again
const RESET_RECOVERY_MS: u32 = 120;

impl<SPI, DC, RST, DELAY> SpiInterface<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    /// Creates a new `SpiInterface` struct
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: DELAY) -> Self {
        SpiInterface {
            spi,
            dc,
            rst,
            delay,
        }
    }

    /// Consumes the interface, handing the peripherals back
    pub fn release(self) -> (SPI, DC, RST, DELAY) {
        (self.spi, self.dc, self.rst, self.delay)
    }

    // spi write helper/abstraction function
    fn write(&mut self, data: &[u8]) -> Result<(), SpiInterfaceError<SPI, DC, RST>> {
        // Be careful!! Linux has a default limit of 4096 bytes per spi transfer
        // see https://raspberrypi.stackexchange.com/questions/65595/spi-transfer-fails-with-buffer-size-greater-than-4096
        if cfg!(target_os = "linux") {
            for data_chunk in data.chunks(4096) {
                self.spi
                    .write(data_chunk)
                    .map_err(InterfaceError::SpiError)?;
            }
            Ok(())
        } else {
            self.spi.write(data).map_err(InterfaceError::SpiError)
        }
    }
}

impl<SPI, DC, RST, DELAY> Transport for SpiInterface<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    type Error = SpiInterfaceError<SPI, DC, RST>;

    /// Toggles RESX. The bus itself is owned by the [SpiDevice] and needs no setup.
    fn init(&mut self) -> Result<(), Self::Error> {
        self.rst.set_high().map_err(InterfaceError::RstError)?;
        self.delay.delay_ms(RESET_PULSE_MS);

        self.rst.set_low().map_err(InterfaceError::RstError)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(InterfaceError::RstError)?;
        self.delay.delay_ms(RESET_RECOVERY_MS);
        Ok(())
    }

    fn write_command(&mut self, opcode: u8) -> Result<(), Self::Error> {
        // low for commands
        self.dc.set_low().map_err(InterfaceError::DcError)?;
        self.write(&[opcode])
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        // high for data
        self.dc.set_high().map_err(InterfaceError::DcError)?;
        self.write(data)
    }

    fn read_data(&mut self) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.dc.set_high().map_err(InterfaceError::DcError)?;
        self.spi
            .transaction(&mut [Operation::Read(&mut buf)])
            .map_err(InterfaceError::SpiError)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn read_register(&mut self, opcode: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        // CSX stays low from the opcode through the reply
        self.dc.set_low().map_err(InterfaceError::DcError)?;
        self.spi
            .transaction(&mut [Operation::Write(&[opcode]), Operation::Read(&mut buf)])
            .map_err(InterfaceError::SpiError)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn delay_ms(&mut self, ms: u32) -> Result<(), Self::Error> {
        self.delay.delay_ms(ms);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, State, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::vec;

    fn done(interface: SpiInterface<SpiMock<u8>, PinMock, PinMock, NoopDelay>) {
        let (mut spi, mut dc, mut rst, _) = interface.release();
        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn command_pulls_dc_low() {
        let spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x29]),
            SpiTransaction::transaction_end(),
        ]);
        let dc = PinMock::new(&[PinTransaction::set(State::Low)]);
        let rst = PinMock::new(&[]);

        let mut interface = SpiInterface::new(spi, dc, rst, NoopDelay::new());
        interface.write_command(0x29).unwrap();
        done(interface);
    }

    #[test]
    fn data_goes_out_as_one_write() {
        let spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x00, 0x0A, 0x00, 0x31]),
            SpiTransaction::transaction_end(),
        ]);
        let dc = PinMock::new(&[PinTransaction::set(State::High)]);
        let rst = PinMock::new(&[]);

        let mut interface = SpiInterface::new(spi, dc, rst, NoopDelay::new());
        interface.write_data(&[0x00, 0x0A, 0x00, 0x31]).unwrap();
        done(interface);
    }

    #[test]
    fn read_is_big_endian() {
        let spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::read_vec(vec![0x85, 0x52]),
            SpiTransaction::transaction_end(),
        ]);
        let dc = PinMock::new(&[PinTransaction::set(State::High)]);
        let rst = PinMock::new(&[]);

        let mut interface = SpiInterface::new(spi, dc, rst, NoopDelay::new());
        assert_eq!(interface.read_data().unwrap(), 0x8552);
        done(interface);
    }

    #[test]
    fn register_read_is_one_transaction() {
        let spi = SpiMock::new(&[
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(vec![0x0a]),
            SpiTransaction::read_vec(vec![0x9c, 0x00]),
            SpiTransaction::transaction_end(),
        ]);
        let dc = PinMock::new(&[PinTransaction::set(State::Low)]);
        let rst = PinMock::new(&[]);

        let mut interface = SpiInterface::new(spi, dc, rst, NoopDelay::new());
        assert_eq!(interface.read_register(0x0a).unwrap(), 0x9c00);
        done(interface);
    }

    #[test]
    fn init_pulses_reset() {
        let spi = SpiMock::new(&[]);
        let dc = PinMock::new(&[]);
        let rst = PinMock::new(&[
            PinTransaction::set(State::High),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);

        let mut interface = SpiInterface::new(spi, dc, rst, NoopDelay::new());
        interface.init().unwrap();
        done(interface);
    }
}
