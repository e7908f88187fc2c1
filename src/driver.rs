//! Display controller variants

use hal::spi::Mode;

use crate::{gc9a01, ili9341, st7735, st7789};

/// Controller chip the panel is wired to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Driver {
    St7735,
    St7789,
    Ili9341,
    Gc9a01,
}

impl Driver {
    /// Name of the flag the graphics library keys its driver selection on
    pub const fn define_name(self) -> &'static str {
        match self {
            Driver::St7735 => "ST7735_DRIVER",
            Driver::St7789 => "ST7789_DRIVER",
            Driver::Ili9341 => "ILI9341_DRIVER",
            Driver::Gc9a01 => "GC9A01_DRIVER",
        }
    }

    /// SPI mode the controller samples data in
    pub const fn spi_mode(self) -> Mode {
        match self {
            Driver::St7735 => st7735::MODE,
            Driver::St7789 => st7789::MODE,
            Driver::Ili9341 => ili9341::MODE,
            Driver::Gc9a01 => gc9a01::MODE,
        }
    }

    /// Size of the controller's frame memory as (width, height)
    pub const fn ram_size(self) -> (u16, u16) {
        match self {
            Driver::St7735 => (st7735::RAM_WIDTH, st7735::RAM_HEIGHT),
            Driver::St7789 => (st7789::RAM_WIDTH, st7789::RAM_HEIGHT),
            Driver::Ili9341 => (ili9341::RAM_WIDTH, ili9341::RAM_HEIGHT),
            Driver::Gc9a01 => (gc9a01::RAM_WIDTH, gc9a01::RAM_HEIGHT),
        }
    }

    /// Panel geometry most commonly paired with this controller
    pub const fn default_size(self) -> (u16, u16) {
        match self {
            Driver::St7735 => (st7735::WIDTH, st7735::HEIGHT),
            Driver::St7789 => (st7789::WIDTH, st7789::HEIGHT),
            Driver::Ili9341 => (ili9341::WIDTH, ili9341::HEIGHT),
            Driver::Gc9a01 => (gc9a01::WIDTH, gc9a01::HEIGHT),
        }
    }

    pub const fn default_spi_frequency(self) -> u32 {
        match self {
            Driver::St7735 => st7735::DEFAULT_SPI_FREQUENCY,
            Driver::St7789 => st7789::DEFAULT_SPI_FREQUENCY,
            Driver::Ili9341 => ili9341::DEFAULT_SPI_FREQUENCY,
            Driver::Gc9a01 => gc9a01::DEFAULT_SPI_FREQUENCY,
        }
    }

    pub const fn max_spi_frequency(self) -> u32 {
        match self {
            Driver::St7735 => st7735::MAX_SPI_FREQUENCY,
            Driver::St7789 => st7789::MAX_SPI_FREQUENCY,
            Driver::Ili9341 => ili9341::MAX_SPI_FREQUENCY,
            Driver::Gc9a01 => gc9a01::MAX_SPI_FREQUENCY,
        }
    }

    /// Whether a `width` x `height` panel fits in frame memory, in either orientation
    pub const fn fits(self, width: u16, height: u16) -> bool {
        let (ram_w, ram_h) = self.ram_size();
        let (short, long) = if width <= height {
            (width, height)
        } else {
            (height, width)
        };
        let (ram_short, ram_long) = if ram_w <= ram_h {
            (ram_w, ram_h)
        } else {
            (ram_h, ram_w)
        };
        short <= ram_short && long <= ram_long
    }
}
