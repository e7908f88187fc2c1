//! A complete panel setup and the symbol listing the graphics library reads

use core::fmt::Write;

use embedded_graphics::prelude::Size;

use crate::color::ColorOrder;
use crate::driver::Driver;
use crate::error::SetupError;
use crate::fonts::{Font, FontSet};
use crate::pins::{PinRole, Pins};
use crate::tab::TabVariant;

/// Everything the graphics library needs to know about the wiring and panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Setup {
    /// Free-form description, reported as `USER_SETUP_INFO` unless empty
    pub info: &'static str,
    pub driver: Driver,
    /// Portrait width in pixels
    pub width: u16,
    /// Portrait height in pixels
    pub height: u16,
    /// Panel batch, ST7735 only
    pub tab: Option<TabVariant>,
    pub color_order: ColorOrder,
    pub fonts: FontSet,
    pub pins: Pins,
    /// SPI clock in Hz
    pub spi_frequency: u32,
}

impl Setup {
    /// Check the setup describes something the driver can be built for.
    ///
    /// This is a `const fn` so the active setup is rejected at compile time.
    pub const fn check(&self) -> Result<(), SetupError> {
        if self.width == 0 || self.height == 0 {
            return Err(SetupError::ZeroGeometry {
                width: self.width,
                height: self.height,
            });
        }
        if !self.driver.fits(self.width, self.height) {
            return Err(SetupError::GeometryExceedsDriver {
                width: self.width,
                height: self.height,
                driver: self.driver,
            });
        }
        if let Some(tab) = self.tab {
            if !matches!(self.driver, Driver::St7735) {
                return Err(SetupError::TabWithoutSt7735 {
                    tab,
                    driver: self.driver,
                });
            }
            if !tab.accepts(self.width, self.height) {
                return Err(SetupError::TabGeometryMismatch {
                    tab,
                    width: self.width,
                    height: self.height,
                });
            }
        }
        if let Err(e) = self.pins.check() {
            return Err(e);
        }
        if self.spi_frequency == 0 {
            return Err(SetupError::SpiFrequencyZero);
        }
        let max = self.driver.max_spi_frequency();
        if self.spi_frequency > max {
            return Err(SetupError::SpiFrequencyTooHigh {
                frequency: self.spi_frequency,
                max,
            });
        }
        if self.fonts.is_empty() {
            return Err(SetupError::NoFonts);
        }
        Ok(())
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }

    /// (column, row) offset of the visible area inside controller RAM
    pub fn ram_offset(&self) -> (u16, u16) {
        self.tab.map_or((0, 0), TabVariant::ram_offset)
    }

    pub fn madctl_color_bit(&self) -> u8 {
        self.color_order.madctl_bit()
    }

    /// The setup as the list of symbols the graphics library is configured
    /// with, in the order a setup header declares them. Options that are not
    /// set are left out.
    pub fn defines(&self) -> impl Iterator<Item = Define> {
        let mut fonts = [None; 8];
        for (slot, font) in fonts.iter_mut().zip(self.fonts.iter()) {
            *slot = Some(Define::flag(font.define_name()));
        }
        let pin = |role: PinRole| {
            Some(Define::new(
                role.define_name(),
                DefineValue::Int(self.pins.get(role).raw()),
            ))
        };

        let head = [
            (!self.info.is_empty())
                .then(|| Define::new("USER_SETUP_INFO", DefineValue::Str(self.info))),
            Some(Define::flag(self.driver.define_name())),
            Some(Define::new("TFT_WIDTH", DefineValue::Int(self.width as i32))),
            Some(Define::new("TFT_HEIGHT", DefineValue::Int(self.height as i32))),
        ];
        let tail = [
            self.tab.map(|tab| Define::flag(tab.define_name())),
            Some(Define::new(
                "TFT_RGB_ORDER",
                DefineValue::Symbol(self.color_order.define_value()),
            )),
            pin(PinRole::Mosi),
            pin(PinRole::Sclk),
            pin(PinRole::Cs),
            pin(PinRole::Dc),
            pin(PinRole::Rst),
            pin(PinRole::Bl),
            Some(Define::new(
                "SPI_FREQUENCY",
                DefineValue::Uint(self.spi_frequency),
            )),
        ];

        head.into_iter().chain(fonts).chain(tail).flatten()
    }

    /// Report the setup on the defmt logger
    pub fn log_summary(&self) {
        #[cfg(feature = "defmt")]
        {
            defmt::info!(
                "Display setup {=str}: {=str} {=u16}x{=u16}, SPI at {=u32} Hz",
                self.info,
                self.driver.define_name(),
                self.width,
                self.height,
                self.spi_frequency
            );
            for define in self.defines() {
                defmt::debug!("{}", define);
            }
        }
    }
}

/// Value half of a setup symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DefineValue {
    /// Defined without a value
    Flag,
    Int(i32),
    Uint(u32),
    /// String literal, quoted when rendered
    Str(&'static str),
    /// Another symbol of the library, such as `TFT_BGR`
    Symbol(&'static str),
}

/// One configuration symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Define {
    pub name: &'static str,
    pub value: DefineValue,
}

impl Define {
    pub const fn new(name: &'static str, value: DefineValue) -> Self {
        Self { name, value }
    }

    pub const fn flag(name: &'static str) -> Self {
        Self::new(name, DefineValue::Flag)
    }
}

impl core::fmt::Display for Define {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.value {
            DefineValue::Flag => write!(f, "#define {}", self.name),
            DefineValue::Int(v) => write!(f, "#define {} {v}", self.name),
            DefineValue::Uint(v) => write!(f, "#define {} {v}", self.name),
            DefineValue::Str(s) => {
                write!(f, "#define {} \"", self.name)?;
                write_escaped(f, s)?;
                f.write_char('"')
            }
            DefineValue::Symbol(s) => write!(f, "#define {} {s}", self.name),
        }
    }
}

/// Write `s` as the body of a C string literal
fn write_escaped(f: &mut core::fmt::Formatter<'_>, s: &str) -> core::fmt::Result {
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            c => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Builder for setups assembled at runtime
///
/// # Example
///
/// ```
/// use tft_setup::{Builder, ColorOrder, Driver, Pin, Pins};
///
/// let setup = Builder::new()
///     .driver(Driver::St7789)
///     .color_order(ColorOrder::Rgb)
///     .pins(Pins {
///         mosi: Pin::Gpio(23),
///         sclk: Pin::Gpio(18),
///         dc: Pin::Gpio(2),
///         ..Pins::UNASSIGNED
///     })
///     .build()
///     .expect("valid setup");
/// assert_eq!((setup.width, setup.height), (240, 240));
/// ```
pub struct Builder {
    info: &'static str,
    driver: Option<Driver>,
    size: Option<(u16, u16)>,
    tab: Option<TabVariant>,
    color_order: ColorOrder,
    fonts: FontSet,
    pins: Pins,
    spi_frequency: Option<u32>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            info: "",
            driver: None,
            size: None,
            tab: None,
            color_order: ColorOrder::Rgb,
            fonts: FontSet::EMPTY.with(Font::Glcd),
            pins: Pins::UNASSIGNED,
            spi_frequency: None,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(mut self, info: &'static str) -> Self {
        self.info = info;
        self
    }

    /// Set the controller (required)
    pub fn driver(mut self, driver: Driver) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Set the portrait geometry. Defaults to the driver's usual panel.
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn tab(mut self, tab: TabVariant) -> Self {
        self.tab = Some(tab);
        self
    }

    pub fn color_order(mut self, order: ColorOrder) -> Self {
        self.color_order = order;
        self
    }

    /// Replace the font selection, which defaults to GLCD only
    pub fn fonts(mut self, fonts: FontSet) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn font(mut self, font: Font) -> Self {
        self.fonts = self.fonts.with(font);
        self
    }

    pub fn pins(mut self, pins: Pins) -> Self {
        self.pins = pins;
        self
    }

    /// Set the SPI clock in Hz. Defaults to the driver's usual clock.
    pub fn spi_frequency(mut self, hz: u32) -> Self {
        self.spi_frequency = Some(hz);
        self
    }

    /// Build and check the setup
    ///
    /// # Errors
    ///
    /// Returns `SetupError::MissingDriver` if no driver was set, otherwise
    /// whatever [`Setup::check`] rejects.
    pub fn build(self) -> Result<Setup, SetupError> {
        let driver = self.driver.ok_or(SetupError::MissingDriver)?;
        let (width, height) = self.size.unwrap_or_else(|| driver.default_size());
        let setup = Setup {
            info: self.info,
            driver,
            width,
            height,
            tab: self.tab,
            color_order: self.color_order,
            fonts: self.fonts,
            pins: self.pins,
            spi_frequency: self
                .spi_frequency
                .unwrap_or_else(|| driver.default_spi_frequency()),
        };
        setup.check()?;
        Ok(setup)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::pins::Pin;
    use std::string::{String, ToString};
    use std::vec::Vec;

    const WIRED: Pins = Pins {
        mosi: Pin::Gpio(21),
        sclk: Pin::Gpio(22),
        cs: Pin::NotConnected,
        dc: Pin::Gpio(5),
        rst: Pin::Gpio(17),
        bl: Pin::Gpio(0),
    };

    const BASE: Setup = Setup {
        info: "test",
        driver: Driver::St7735,
        width: 128,
        height: 160,
        tab: Some(TabVariant::BlackTab),
        color_order: ColorOrder::Bgr,
        fonts: FontSet::EMPTY.with(Font::Glcd),
        pins: WIRED,
        spi_frequency: 27_000_000,
    };

    #[test]
    fn base_setup_is_valid() {
        assert_eq!(BASE.check(), Ok(()));
        assert_eq!(BASE.size(), Size::new(128, 160));
        assert_eq!(BASE.ram_offset(), (0, 0));
        assert_eq!(BASE.madctl_color_bit(), 0x08);
    }

    #[test]
    fn zero_geometry() {
        let setup = Setup { width: 0, ..BASE };
        assert_eq!(
            setup.check(),
            Err(SetupError::ZeroGeometry {
                width: 0,
                height: 160
            })
        );
    }

    #[test]
    fn geometry_too_large_for_driver() {
        let setup = Setup {
            width: 240,
            height: 320,
            tab: None,
            ..BASE
        };
        assert_eq!(
            setup.check(),
            Err(SetupError::GeometryExceedsDriver {
                width: 240,
                height: 320,
                driver: Driver::St7735,
            })
        );
    }

    #[test]
    fn landscape_geometry_is_accepted() {
        let setup = Setup {
            width: 160,
            height: 128,
            ..BASE
        };
        assert_eq!(setup.check(), Ok(()));
    }

    #[test]
    fn tab_requires_st7735() {
        let setup = Setup {
            driver: Driver::St7789,
            ..BASE
        };
        assert_eq!(
            setup.check(),
            Err(SetupError::TabWithoutSt7735 {
                tab: TabVariant::BlackTab,
                driver: Driver::St7789,
            })
        );
        let setup = Setup {
            tab: None,
            ..setup
        };
        assert_eq!(setup.check(), Ok(()));
    }

    #[test]
    fn mini_tab_rejects_full_panel() {
        let setup = Setup {
            tab: Some(TabVariant::GreenTab160x80),
            ..BASE
        };
        assert_eq!(
            setup.check(),
            Err(SetupError::TabGeometryMismatch {
                tab: TabVariant::GreenTab160x80,
                width: 128,
                height: 160,
            })
        );
        let setup = Setup {
            width: 80,
            ..setup
        };
        assert_eq!(setup.check(), Ok(()));
        assert_eq!(setup.ram_offset(), (26, 1));
    }

    #[test]
    fn pin_errors_propagate() {
        let setup = Setup {
            pins: Pins {
                sclk: Pin::NotConnected,
                ..WIRED
            },
            ..BASE
        };
        assert_eq!(
            setup.check(),
            Err(SetupError::RequiredPinMissing(PinRole::Sclk))
        );
    }

    #[test]
    fn spi_frequency_bounds() {
        let setup = Setup {
            spi_frequency: 0,
            ..BASE
        };
        assert_eq!(setup.check(), Err(SetupError::SpiFrequencyZero));

        let setup = Setup {
            spi_frequency: 80_000_000,
            ..BASE
        };
        assert_eq!(
            setup.check(),
            Err(SetupError::SpiFrequencyTooHigh {
                frequency: 80_000_000,
                max: 40_000_000,
            })
        );

        let setup = Setup {
            driver: Driver::Ili9341,
            tab: None,
            ..setup
        };
        assert_eq!(setup.check(), Ok(()));
    }

    #[test]
    fn fonts_required() {
        let setup = Setup {
            fonts: FontSet::EMPTY,
            ..BASE
        };
        assert_eq!(setup.check(), Err(SetupError::NoFonts));
    }

    #[test]
    fn spi_frequency_at_driver_maximum_is_accepted() {
        let setup = Setup {
            spi_frequency: Driver::St7735.max_spi_frequency(),
            ..BASE
        };
        assert_eq!(setup.spi_frequency, 40_000_000);
        assert_eq!(setup.check(), Ok(()));
    }

    #[test]
    fn pin_at_max_gpio_is_accepted() {
        let setup = Setup {
            pins: Pins {
                rst: Pin::Gpio(crate::pins::MAX_GPIO),
                ..WIRED
            },
            ..BASE
        };
        assert_eq!(setup.check(), Ok(()));
    }

    #[test]
    fn empty_info_is_not_defined() {
        let setup = Builder::new()
            .driver(Driver::St7789)
            .pins(WIRED)
            .build()
            .unwrap();
        assert!(setup.defines().all(|d| d.name != "USER_SETUP_INFO"));
        assert_eq!(
            setup.defines().next().map(|d| d.to_string()),
            Some("#define ST7789_DRIVER".to_string())
        );
    }

    #[test]
    fn info_is_escaped_as_c_string() {
        let setup = Setup {
            info: "My \"fast\" board\\",
            ..BASE
        };
        let first = setup.defines().next().map(|d| d.to_string());
        assert_eq!(
            first.as_deref(),
            Some("#define USER_SETUP_INFO \"My \\\"fast\\\" board\\\\\"")
        );

        let setup = Setup {
            info: "two\nlines",
            ..BASE
        };
        let first = setup.defines().next().map(|d| d.to_string());
        assert_eq!(
            first.as_deref(),
            Some("#define USER_SETUP_INFO \"two\\nlines\"")
        );
    }

    #[test]
    fn defines_skip_unset_options() {
        let setup = Setup { tab: None, ..BASE };
        let names: Vec<&str> = setup.defines().map(|d| d.name).collect();
        assert_eq!(
            names,
            [
                "USER_SETUP_INFO",
                "ST7735_DRIVER",
                "TFT_WIDTH",
                "TFT_HEIGHT",
                "LOAD_GLCD",
                "TFT_RGB_ORDER",
                "TFT_MOSI",
                "TFT_SCLK",
                "TFT_CS",
                "TFT_DC",
                "TFT_RST",
                "TFT_BL",
                "SPI_FREQUENCY",
            ]
        );
    }

    #[test]
    fn define_rendering() {
        let rendered: Vec<String> = BASE.defines().map(|d| d.to_string()).collect();
        assert_eq!(rendered[0], "#define USER_SETUP_INFO \"test\"");
        assert_eq!(rendered[1], "#define ST7735_DRIVER");
        assert!(rendered.contains(&"#define TFT_CS -1".to_string()));
        assert!(rendered.contains(&"#define TFT_RGB_ORDER TFT_BGR".to_string()));
        assert_eq!(
            rendered.last().map(String::as_str),
            Some("#define SPI_FREQUENCY 27000000")
        );
    }

    #[test]
    fn builder_needs_a_driver() {
        assert_eq!(
            Builder::new().pins(WIRED).build(),
            Err(SetupError::MissingDriver)
        );
    }

    #[test]
    fn builder_fills_driver_defaults() {
        let setup = Builder::new()
            .driver(Driver::Ili9341)
            .pins(WIRED)
            .font(Font::Font4)
            .build()
            .unwrap();
        assert_eq!((setup.width, setup.height), (240, 320));
        assert_eq!(setup.spi_frequency, 40_000_000);
        assert!(setup.fonts.contains(Font::Glcd));
        assert!(setup.fonts.contains(Font::Font4));
        assert_eq!(setup.color_order, ColorOrder::Rgb);
    }

    #[test]
    fn builder_checks_the_result() {
        let result = Builder::new()
            .driver(Driver::St7735)
            .size(80, 160)
            .tab(TabVariant::GreenTab128)
            .pins(WIRED)
            .build();
        assert_eq!(
            result,
            Err(SetupError::TabGeometryMismatch {
                tab: TabVariant::GreenTab128,
                width: 80,
                height: 160,
            })
        );
    }
}
