//! ST7735 tab variants
//!
//! Panel batches are marked with a coloured tab on the protective film. The
//! batches differ in where the visible area sits inside controller RAM, so
//! each tab carries the column/row offset the driver must add to addresses.

/// Calibration flag for an ST7735 panel batch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TabVariant {
    GreenTab,
    GreenTab2,
    GreenTab3,
    GreenTab128,
    GreenTab160x80,
    RedTab,
    RedTab160x80,
    BlackTab,
}

impl TabVariant {
    pub const fn define_name(self) -> &'static str {
        match self {
            TabVariant::GreenTab => "ST7735_GREENTAB",
            TabVariant::GreenTab2 => "ST7735_GREENTAB2",
            TabVariant::GreenTab3 => "ST7735_GREENTAB3",
            TabVariant::GreenTab128 => "ST7735_GREENTAB128",
            TabVariant::GreenTab160x80 => "ST7735_GREENTAB160x80",
            TabVariant::RedTab => "ST7735_REDTAB",
            TabVariant::RedTab160x80 => "ST7735_REDTAB160x80",
            TabVariant::BlackTab => "ST7735_BLACKTAB",
        }
    }

    /// (column, row) offset of the visible area in portrait orientation
    pub const fn ram_offset(self) -> (u16, u16) {
        match self {
            TabVariant::GreenTab | TabVariant::GreenTab2 => (2, 1),
            TabVariant::GreenTab3 => (2, 3),
            TabVariant::GreenTab128 => (0, 32),
            TabVariant::GreenTab160x80 => (26, 1),
            TabVariant::RedTab160x80 => (24, 0),
            TabVariant::RedTab | TabVariant::BlackTab => (0, 0),
        }
    }

    /// Portrait (width, height) the tab is only ever fitted to, if any
    pub const fn required_size(self) -> Option<(u16, u16)> {
        match self {
            TabVariant::GreenTab128 => Some((128, 128)),
            TabVariant::GreenTab160x80 | TabVariant::RedTab160x80 => Some((80, 160)),
            _ => None,
        }
    }

    /// Whether a `width` x `height` panel is compatible with this tab
    pub const fn accepts(self, width: u16, height: u16) -> bool {
        match self.required_size() {
            Some((w, h)) => (w == width && h == height) || (w == height && h == width),
            None => true,
        }
    }
}
