use hal::spi::{Mode, Phase, Polarity};

pub(crate) const MODE: Mode = Mode {
    polarity: Polarity::IdleLow,
    phase: Phase::CaptureOnFirstTransition,
};
// Controller RAM is 132x162, panels are usually 128x160
pub(crate) const RAM_WIDTH: u16 = 132;
pub(crate) const RAM_HEIGHT: u16 = 162;
pub(crate) const WIDTH: u16 = 128;
pub(crate) const HEIGHT: u16 = 160;
pub(crate) const DEFAULT_SPI_FREQUENCY: u32 = 27_000_000;
pub(crate) const MAX_SPI_FREQUENCY: u32 = 40_000_000;
