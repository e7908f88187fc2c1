//! Bitmap font tables to link into the firmware

use bitvec::prelude::*;

/// Font table the graphics library can be told to compile in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Font 1, the classic 6x8 Adafruit font
    Glcd = 0,
    /// Font 2, 16 pixels high
    Font2 = 1,
    /// Font 4, 26 pixels high
    Font4 = 2,
    /// Font 6, 48 pixel digits
    Font6 = 3,
    /// Font 7, 7-segment digits
    Font7 = 4,
    /// Font 8, 75 pixel digits
    Font8 = 5,
    /// FreeFonts
    Gfxff = 6,
    /// Anti-aliased fonts loaded from flash
    Smooth = 7,
}

impl Font {
    pub const ALL: [Font; 8] = [
        Font::Glcd,
        Font::Font2,
        Font::Font4,
        Font::Font6,
        Font::Font7,
        Font::Font8,
        Font::Gfxff,
        Font::Smooth,
    ];

    pub const fn define_name(self) -> &'static str {
        match self {
            Font::Glcd => "LOAD_GLCD",
            Font::Font2 => "LOAD_FONT2",
            Font::Font4 => "LOAD_FONT4",
            Font::Font6 => "LOAD_FONT6",
            Font::Font7 => "LOAD_FONT7",
            Font::Font8 => "LOAD_FONT8",
            Font::Gfxff => "LOAD_GFXFF",
            Font::Smooth => "SMOOTH_FONT",
        }
    }

    const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Set of fonts, one bit per [`Font`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontSet(u8);

impl FontSet {
    pub const EMPTY: FontSet = FontSet(0);

    /// Fonts selected through the `load-*` and `smooth-font` cargo features
    pub const fn from_features() -> Self {
        let mut set = Self::EMPTY;
        if cfg!(feature = "load-glcd") {
            set = set.with(Font::Glcd);
        }
        if cfg!(feature = "load-font2") {
            set = set.with(Font::Font2);
        }
        if cfg!(feature = "load-font4") {
            set = set.with(Font::Font4);
        }
        if cfg!(feature = "load-font6") {
            set = set.with(Font::Font6);
        }
        if cfg!(feature = "load-font7") {
            set = set.with(Font::Font7);
        }
        if cfg!(feature = "load-font8") {
            set = set.with(Font::Font8);
        }
        if cfg!(feature = "load-gfxff") {
            set = set.with(Font::Gfxff);
        }
        if cfg!(feature = "smooth-font") {
            set = set.with(Font::Smooth);
        }
        set
    }

    pub const fn with(self, font: Font) -> Self {
        FontSet(self.0 | font.mask())
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn bits(&self) -> &BitSlice<u8, Lsb0> {
        BitSlice::<u8, Lsb0>::from_element(&self.0)
    }

    pub fn contains(&self, font: Font) -> bool {
        self.bits()[font as usize]
    }

    pub fn len(&self) -> usize {
        self.bits().count_ones()
    }

    /// Loaded fonts, in [`Font::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = Font> + '_ {
        self.bits().iter_ones().map(|i| Font::ALL[i])
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FontSet {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "FontSet({=u8:08b})", self.0);
    }
}
