//! SPI Commands for the ST7789V controller

use crate::traits;

/// ST7789V commands
///
/// The names follow the mnemonics of the Sitronix datasheet, which groups them in
/// the System Function table (command table 1) and the Panel Function table
/// (command table 2, unlocked by [Command::CMD2EN]).
///
/// Most of these are not needed directly; they are listed for use with
/// [CommandDescriptor](crate::sequence::CommandDescriptor) and
/// [St7789v::read_register](crate::st7789v::St7789v::read_register).
#[allow(dead_code)]
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// No operation
    NOP = 0x00,
    /// Software reset. Wait 5ms before the next command, 120ms before SLPOUT.
    SWRESET = 0x01,
    /// Read display ID
    RDDID = 0x04,
    /// Read display status
    RDDST = 0x09,
    /// Read display power mode
    RDDPM = 0x0a,
    /// Read display MADCTL
    RDDMADCTL = 0x0b,
    /// Read display pixel format
    RDDCOLMOD = 0x0c,
    /// Read display image mode
    RDDIM = 0x0d,
    /// Read display signal mode
    RDDSM = 0x0e,
    /// Read display self-diagnostic result
    RDDSDR = 0x0f,
    /// Sleep in
    SLPIN = 0x10,
    /// Sleep out. Wait 120ms before the next SLPIN, 5ms before anything else.
    SLPOUT = 0x11,
    /// Partial display mode on
    PTLON = 0x12,
    /// Normal display mode on (partial off)
    NORON = 0x13,
    /// Display inversion off
    INVOFF = 0x20,
    /// Display inversion on
    INVON = 0x21,
    /// Gamma curve select
    GAMSET = 0x26,
    /// Display off
    DISPOFF = 0x28,
    /// Display on
    DISPON = 0x29,
    /// Column address set
    ///
    /// 4 Databytes: XS[15:8], XS[7:0], XE[15:8], XE[7:0]
    CASET = 0x2a,
    /// Row address set
    ///
    /// 4 Databytes: YS[15:8], YS[7:0], YE[15:8], YE[7:0]
    RASET = 0x2b,
    /// Memory write: following data goes to frame memory, starting at the window origin
    RAMWR = 0x2c,
    /// Memory read
    RAMRD = 0x2e,
    /// Partial start/end address set
    PTLAR = 0x30,
    /// Vertical scrolling definition
    VSCRDEF = 0x33,
    /// Tearing effect line off
    TEOFF = 0x34,
    /// Tearing effect line on
    TEON = 0x35,
    /// Memory data access control
    ///
    /// 1 Databyte: MY MX MV ML RGB MH 0 0
    MADCTL = 0x36,
    /// Vertical scroll start address
    VSCRSADD = 0x37,
    /// Idle mode off
    IDMOFF = 0x38,
    /// Idle mode on
    IDMON = 0x39,
    /// Interface pixel format. 0x55 selects 65K colors, 16 bit/pixel.
    COLMOD = 0x3a,
    /// Memory write continue
    RAMWRC = 0x3c,
    /// Memory read continue
    RAMRDC = 0x3e,
    /// Set tear scanline
    TESCAN = 0x44,
    /// Get scanline
    RDTESCAN = 0x45,
    /// Write display brightness
    WRDISBV = 0x51,
    /// Read display brightness value
    RDDISBV = 0x52,
    /// Write CTRL display
    WRCTRLD = 0x53,
    /// Read CTRL value display
    RDCTRLD = 0x54,
    /// Write content adaptive brightness control and color enhancement
    WRCACE = 0x55,
    /// Read content adaptive brightness control
    RDCABC = 0x56,
    /// Write CABC minimum brightness
    WRCABCMB = 0x5e,
    /// Read CABC minimum brightness
    RDCABCMB = 0x5f,
    /// Read automatic brightness control self-diagnostic result
    RDABCSDR = 0x68,
    /// Read ID1
    RDID1 = 0xda,
    /// Read ID2
    RDID2 = 0xdb,
    /// Read ID3
    RDID3 = 0xdc,

    /// RAM control: RAM access from MCU or RGB interface, endianness
    RAMCTRL = 0xb0,
    /// RGB interface control: sync mode, polarities, porches
    RGBCTRL = 0xb1,
    /// Porch setting
    PORCTRL = 0xb2,
    /// Frame rate control 1 (partial/idle mode)
    FRCTRL1 = 0xb3,
    /// Gate control: VGH and VGL levels
    GCTRL = 0xb7,
    /// Digital gamma enable
    DGMEN = 0xba,
    /// VCOM setting
    VCOMS = 0xbb,
    /// LCM control
    LCMCTRL = 0xc0,
    /// ID code setting
    IDSET = 0xc1,
    /// VDV and VRH command enable
    VDVVRHEN = 0xc2,
    /// VRH set
    VRHS = 0xc3,
    /// VDV set
    VDVSET = 0xc4,
    /// VCOM offset set
    VCMOFSET = 0xc5,
    /// Frame rate control in normal mode
    FRCTR2 = 0xc6,
    /// CABC control
    CABCCTRL = 0xc7,
    /// Register value selection 1
    REGSEL1 = 0xc8,
    /// Register value selection 2
    REGSEL2 = 0xca,
    /// PWM frequency selection
    PWMFRSEL = 0xcc,
    /// Power control 1: AVDD, AVCL and VDDS
    PWCTRL1 = 0xd0,
    /// Enable VAP/VAN signal output
    VAPVANEN = 0xd2,
    /// Command 2 enable
    CMD2EN = 0xdf,
    /// Positive voltage gamma control, 14 Databytes
    PVGAMCTRL = 0xe0,
    /// Negative voltage gamma control, 14 Databytes
    NVGAMCTRL = 0xe1,
    /// Digital gamma look-up table for red
    DGMLUTR = 0xe2,
    /// Digital gamma look-up table for blue
    DGMLUTB = 0xe3,
    /// Gate control
    GATECTRL = 0xe4,
    /// Power control 2
    PWCTRL2 = 0xe8,
    /// Equalize time control
    EQCTRL = 0xe9,
    /// Program mode control
    PROMCTRL = 0xec,
    /// Program mode enable
    PROMEN = 0xfa,
    /// NVM setting
    NVMSET = 0xfc,
    /// Program action
    PROMACT = 0xfe,
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SEQUENCE_END;
    use crate::traits::Command as CommandTrait;

    #[test]
    fn command_addr() {
        assert_eq!(Command::NOP.address(), 0x00);
        assert_eq!(Command::CASET.address(), 0x2a);
        assert_eq!(Command::RASET.address(), 0x2b);
        assert_eq!(Command::RAMWR.address(), 0x2c);
        assert_eq!(Command::PROMACT.address(), 0xfe);
    }

    #[test]
    fn no_command_uses_the_terminator() {
        assert_ne!(Command::PROMACT.address(), SEQUENCE_END);
    }
}
