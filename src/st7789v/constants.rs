//! Power-up sequences of the 2" 240x320 ST7789V module
//!
//! Delays follow the datasheet power-on timing: 120ms after leaving sleep,
//! 5ms+ after a software reset, nothing after plain register writes.

use super::{Command, HEIGHT, WIDTH};
use crate::rect::Window;
use crate::sequence::CommandDescriptor as Cmd;

static FULL_COLUMNS: [u8; 4] = Window::new(0, 0, WIDTH - 1, HEIGHT - 1).column_payload();
static FULL_ROWS: [u8; 4] = Window::new(0, 0, WIDTH - 1, HEIGHT - 1).row_payload();

/// Phase 1: reset into a known state and load the panel's electrical and gamma setup
pub static PANEL_SETUP: &[Cmd<'static>] = &[
    Cmd::bare(Command::SLPIN, 10),
    Cmd::bare(Command::SWRESET, 200),
    Cmd::bare(Command::SLPOUT, 120),
    Cmd::bare(Command::CMD2EN, 100),
    // top to bottom, left to right, RGB order
    Cmd::new(Command::MADCTL, 0, &[0x00]),
    // 65K colors, 16 bit/pixel on both interfaces
    Cmd::new(Command::COLMOD, 0, &[0x55]),
    Cmd::bare(Command::INVON, 0),
    Cmd::new(Command::CASET, 0, &FULL_COLUMNS),
    Cmd::new(Command::RASET, 0, &FULL_ROWS),
    Cmd::new(Command::PORCTRL, 0, &[0x0c, 0x0c, 0x00, 0x33, 0x33]),
    // VGH 12.54V, VGL -9.6V
    Cmd::new(Command::GCTRL, 0, &[0x35]),
    // VCOM 1.475V
    Cmd::new(Command::VCOMS, 0, &[0x1f]),
    Cmd::new(Command::VDVVRHEN, 0, &[0x01]),
    Cmd::new(Command::LCMCTRL, 0, &[0x2c]),
    // GVDD = 4.45 + (vcom + vcom offset + vdv)
    Cmd::new(Command::VRHS, 0, &[0x12]),
    // VDV 0V
    Cmd::new(Command::VDVSET, 0, &[0x20]),
    // AVDD 6.8V, AVCL -4.8V, VDDS 2.3V
    Cmd::new(Command::PWCTRL1, 0, &[0xa4, 0xa1]),
    // 60Hz
    Cmd::new(Command::FRCTR2, 0, &[0x0f]),
    // gamma 2.2
    Cmd::new(Command::GAMSET, 0, &[0x01]),
    Cmd::new(
        Command::PVGAMCTRL,
        0,
        &[
            0xd0, 0x08, 0x11, 0x08, 0x0c, 0x15, 0x39, 0x33, 0x50, 0x36, 0x13, 0x14, 0x29, 0x2d,
        ],
    ),
    Cmd::new(
        Command::NVGAMCTRL,
        0,
        &[
            0xd0, 0x08, 0x10, 0x08, 0x06, 0x06, 0x39, 0x44, 0x51, 0x0b, 0x16, 0x14, 0x2f, 0x31,
        ],
    ),
    Cmd::end(),
];

/// Phase 2: switch RAM access to the RGB interface and turn the output on
pub static OUTPUT_ENABLE: &[Cmd<'static>] = &[
    // HSYNC/VSYNC mode, HBP 0x08, VBP 0x3c
    Cmd::new(Command::RGBCTRL, 0, &[0x42, 0x08, 0x3c]),
    // RAM written from the RGB interface
    Cmd::new(Command::RAMCTRL, 0, &[0x11, 0xc2]),
    Cmd::bare(Command::DISPON, 100),
    Cmd::bare(Command::SLPOUT, 100),
    Cmd::bare(Command::RAMWR, 50),
    Cmd::end(),
];
