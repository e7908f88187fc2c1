#![no_std]
//! Compile-time hardware setup for SPI TFT panels.
//!
//! The controller, ST7735 tab variant and fonts are picked with cargo
//! features; the board's wiring, colour order and SPI clock live in
//! [`board`]. The result is [`SETUP`], which is checked while compiling so a
//! bad combination never reaches the hardware.
extern crate bitvec;
extern crate embedded_graphics;
extern crate embedded_hal as hal;

pub mod board;
pub mod color;
pub mod driver;
pub mod error;
pub mod fonts;
pub mod pins;
pub mod setup;
pub mod tab;

mod gc9a01;
mod ili9341;
mod st7735;
mod st7789;

pub use color::ColorOrder;
pub use driver::Driver;
pub use error::SetupError;
pub use fonts::{Font, FontSet};
pub use pins::{Pin, PinRole, Pins, MAX_GPIO};
pub use setup::{Builder, Define, DefineValue, Setup};
pub use tab::TabVariant;

const DRIVER_FEATURES: usize = cfg!(feature = "st7735") as usize
    + cfg!(feature = "st7789") as usize
    + cfg!(feature = "ili9341") as usize
    + cfg!(feature = "gc9a01") as usize;

const TAB_FEATURES: usize = cfg!(feature = "greentab") as usize
    + cfg!(feature = "greentab2") as usize
    + cfg!(feature = "greentab3") as usize
    + cfg!(feature = "greentab128") as usize
    + cfg!(feature = "greentab160x80") as usize
    + cfg!(feature = "redtab") as usize
    + cfg!(feature = "redtab160x80") as usize
    + cfg!(feature = "blacktab") as usize;

const _: () = assert!(
    DRIVER_FEATURES == 1,
    "enable exactly one driver feature: st7735, st7789, ili9341 or gc9a01"
);
const _: () = assert!(TAB_FEATURES <= 1, "enable at most one tab feature");

const fn active_driver() -> Driver {
    if cfg!(feature = "st7789") {
        Driver::St7789
    } else if cfg!(feature = "ili9341") {
        Driver::Ili9341
    } else if cfg!(feature = "gc9a01") {
        Driver::Gc9a01
    } else {
        Driver::St7735
    }
}

const fn active_tab() -> Option<TabVariant> {
    if cfg!(feature = "greentab") {
        Some(TabVariant::GreenTab)
    } else if cfg!(feature = "greentab2") {
        Some(TabVariant::GreenTab2)
    } else if cfg!(feature = "greentab3") {
        Some(TabVariant::GreenTab3)
    } else if cfg!(feature = "greentab128") {
        Some(TabVariant::GreenTab128)
    } else if cfg!(feature = "greentab160x80") {
        Some(TabVariant::GreenTab160x80)
    } else if cfg!(feature = "redtab") {
        Some(TabVariant::RedTab)
    } else if cfg!(feature = "redtab160x80") {
        Some(TabVariant::RedTab160x80)
    } else if cfg!(feature = "blacktab") {
        Some(TabVariant::BlackTab)
    } else {
        None
    }
}

/// The setup this build is compiled for
pub const SETUP: Setup = Setup {
    info: board::INFO,
    driver: active_driver(),
    width: board::WIDTH,
    height: board::HEIGHT,
    tab: active_tab(),
    color_order: board::COLOR_ORDER,
    fonts: FontSet::from_features(),
    pins: board::PINS,
    spi_frequency: board::SPI_FREQUENCY,
};

const _: () = match SETUP.check() {
    Ok(()) => (),
    Err(_) => panic!("display setup rejected, see Setup::check"),
};
