//! BatController board: ST7735S 160x128 on an ESP32

use crate::color::ColorOrder;
use crate::pins::{Pin, Pins};

pub const INFO: &str = "BatController ST7735 160x128";

// Portrait; the sketch rotates to landscape
pub const WIDTH: u16 = 128;
pub const HEIGHT: u16 = 160;

// Blacktab batches ship with red and blue swapped
pub const COLOR_ORDER: ColorOrder = ColorOrder::Bgr;

pub const PINS: Pins = Pins {
    mosi: Pin::Gpio(21),
    sclk: Pin::Gpio(22),
    // CS tied low on the board
    cs: Pin::NotConnected,
    dc: Pin::Gpio(5),
    rst: Pin::Gpio(17),
    bl: Pin::Gpio(0),
};

pub const SPI_FREQUENCY: u32 = 27_000_000;
