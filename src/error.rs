//! Errors reported when a setup does not describe a buildable panel

use crate::driver::Driver;
use crate::pins::PinRole;
use crate::tab::TabVariant;

/// Why a [`Setup`](crate::Setup) was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    /// No driver was selected on the builder
    MissingDriver,
    /// Width or height is zero
    ZeroGeometry { width: u16, height: u16 },
    /// Panel is larger than the controller's frame memory
    GeometryExceedsDriver {
        width: u16,
        height: u16,
        driver: Driver,
    },
    /// Tab variants only exist for the ST7735
    TabWithoutSt7735 { tab: TabVariant, driver: Driver },
    /// Tab is only fitted to a different panel size
    TabGeometryMismatch {
        tab: TabVariant,
        width: u16,
        height: u16,
    },
    /// A line the panel needs is not connected
    RequiredPinMissing(PinRole),
    /// GPIO number above [`MAX_GPIO`](crate::pins::MAX_GPIO)
    PinOutOfRange { role: PinRole, gpio: u8 },
    /// Two lines share one GPIO
    DuplicatePin {
        first: PinRole,
        second: PinRole,
        gpio: u8,
    },
    /// Integer pin is neither `-1` nor a valid GPIO number
    InvalidRawPin(i32),
    SpiFrequencyZero,
    SpiFrequencyTooHigh { frequency: u32, max: u32 },
    /// Not a single font table selected
    NoFonts,
}

impl core::fmt::Display for SetupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::MissingDriver => write!(f, "Driver must be specified"),
            SetupError::ZeroGeometry { width, height } => {
                write!(f, "Invalid geometry {width}x{height}")
            }
            SetupError::GeometryExceedsDriver {
                width,
                height,
                driver,
            } => {
                let (ram_w, ram_h) = driver.ram_size();
                write!(
                    f,
                    "Geometry {width}x{height} exceeds {} frame memory {ram_w}x{ram_h}",
                    driver.define_name()
                )
            }
            SetupError::TabWithoutSt7735 { tab, driver } => write!(
                f,
                "{} cannot be used with {}",
                tab.define_name(),
                driver.define_name()
            ),
            SetupError::TabGeometryMismatch { tab, width, height } => write!(
                f,
                "{} does not fit a {width}x{height} panel",
                tab.define_name()
            ),
            SetupError::RequiredPinMissing(role) => {
                write!(f, "{} must be connected", role.define_name())
            }
            SetupError::PinOutOfRange { role, gpio } => {
                write!(f, "{} uses GPIO {gpio}, which is out of range", role.define_name())
            }
            SetupError::DuplicatePin {
                first,
                second,
                gpio,
            } => write!(
                f,
                "{} and {} both use GPIO {gpio}",
                first.define_name(),
                second.define_name()
            ),
            SetupError::InvalidRawPin(raw) => write!(f, "Invalid pin number {raw}"),
            SetupError::SpiFrequencyZero => write!(f, "SPI frequency must be non-zero"),
            SetupError::SpiFrequencyTooHigh { frequency, max } => {
                write!(f, "SPI frequency {frequency} Hz above maximum {max} Hz")
            }
            SetupError::NoFonts => write!(f, "At least one font must be loaded"),
        }
    }
}

impl core::error::Error for SetupError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn messages_use_library_names() {
        let err = SetupError::DuplicatePin {
            first: PinRole::Mosi,
            second: PinRole::Bl,
            gpio: 21,
        };
        assert_eq!(err.to_string(), "TFT_MOSI and TFT_BL both use GPIO 21");

        let err = SetupError::TabWithoutSt7735 {
            tab: TabVariant::BlackTab,
            driver: Driver::St7789,
        };
        assert_eq!(
            err.to_string(),
            "ST7735_BLACKTAB cannot be used with ST7789_DRIVER"
        );
    }

    #[test]
    fn geometry_message_reports_frame_memory() {
        let err = SetupError::GeometryExceedsDriver {
            width: 240,
            height: 320,
            driver: Driver::St7735,
        };
        assert_eq!(
            err.to_string(),
            "Geometry 240x320 exceeds ST7735_DRIVER frame memory 132x162"
        );
    }
}
