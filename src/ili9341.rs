use hal::spi::{Mode, Phase, Polarity};

pub(crate) const MODE: Mode = Mode {
    polarity: Polarity::IdleLow,
    phase: Phase::CaptureOnFirstTransition,
};
pub(crate) const RAM_WIDTH: u16 = 240;
pub(crate) const RAM_HEIGHT: u16 = 320;
pub(crate) const WIDTH: u16 = 240;
pub(crate) const HEIGHT: u16 = 320;
pub(crate) const DEFAULT_SPI_FREQUENCY: u32 = 40_000_000;
pub(crate) const MAX_SPI_FREQUENCY: u32 = 80_000_000;
