use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// MADCTL bit selecting BGR order on MIPI DCS controllers
pub const MADCTL_BGR: u8 = 0x08;

/// Order in which the panel expects the colour channels on the wire
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    #[default]
    Rgb,
    Bgr,
}

impl ColorOrder {
    /// Value symbol for `TFT_RGB_ORDER`
    pub const fn define_value(self) -> &'static str {
        match self {
            ColorOrder::Rgb => "TFT_RGB",
            ColorOrder::Bgr => "TFT_BGR",
        }
    }

    pub const fn madctl_bit(self) -> u8 {
        match self {
            ColorOrder::Rgb => 0,
            ColorOrder::Bgr => MADCTL_BGR,
        }
    }

    /// Translate a colour into the channel order the panel expects.
    ///
    /// Useful when the controller's MADCTL bit cannot be changed and the
    /// swap has to happen before pixels are pushed.
    pub fn to_panel(self, color: Rgb565) -> Rgb565 {
        match self {
            ColorOrder::Rgb => color,
            // Red and blue are both 5 bits wide in 565
            ColorOrder::Bgr => Rgb565::new(color.b(), color.g(), color.r()),
        }
    }
}
