//! GPIO assignments for the panel's SPI and control lines

use crate::error::SetupError;

/// Highest GPIO number accepted in a setup
pub const MAX_GPIO: u8 = 48;

/// Raw value the graphics library reads as "not connected"
pub const NOT_CONNECTED: i32 = -1;

/// A GPIO number, or a line that is not wired up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    Gpio(u8),
    NotConnected,
}

impl Pin {
    /// Convert from the integer form, where `-1` means not connected
    pub const fn from_raw(raw: i32) -> Result<Self, SetupError> {
        if raw == NOT_CONNECTED {
            Ok(Pin::NotConnected)
        } else if raw < 0 || raw > MAX_GPIO as i32 {
            Err(SetupError::InvalidRawPin(raw))
        } else {
            Ok(Pin::Gpio(raw as u8))
        }
    }

    pub const fn raw(self) -> i32 {
        match self {
            Pin::Gpio(n) => n as i32,
            Pin::NotConnected => NOT_CONNECTED,
        }
    }

    pub const fn gpio(self) -> Option<u8> {
        match self {
            Pin::Gpio(n) => Some(n),
            Pin::NotConnected => None,
        }
    }

    pub const fn is_connected(self) -> bool {
        matches!(self, Pin::Gpio(_))
    }
}

/// Which line a pin drives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    Mosi,
    Sclk,
    Cs,
    Dc,
    Rst,
    Bl,
}

impl PinRole {
    pub const ALL: [PinRole; 6] = [
        PinRole::Mosi,
        PinRole::Sclk,
        PinRole::Cs,
        PinRole::Dc,
        PinRole::Rst,
        PinRole::Bl,
    ];

    pub const fn define_name(self) -> &'static str {
        match self {
            PinRole::Mosi => "TFT_MOSI",
            PinRole::Sclk => "TFT_SCLK",
            PinRole::Cs => "TFT_CS",
            PinRole::Dc => "TFT_DC",
            PinRole::Rst => "TFT_RST",
            PinRole::Bl => "TFT_BL",
        }
    }

    /// Lines the panel cannot work without. CS may be tied low, RST may be
    /// tied to the MCU reset and BL may be hard-wired on.
    pub const fn is_required(self) -> bool {
        matches!(self, PinRole::Mosi | PinRole::Sclk | PinRole::Dc)
    }
}

/// Pin assignment for a panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pins {
    pub mosi: Pin,
    pub sclk: Pin,
    pub cs: Pin,
    pub dc: Pin,
    pub rst: Pin,
    pub bl: Pin,
}

impl Default for Pins {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl Pins {
    pub const UNASSIGNED: Pins = Pins {
        mosi: Pin::NotConnected,
        sclk: Pin::NotConnected,
        cs: Pin::NotConnected,
        dc: Pin::NotConnected,
        rst: Pin::NotConnected,
        bl: Pin::NotConnected,
    };

    pub const fn get(&self, role: PinRole) -> Pin {
        match role {
            PinRole::Mosi => self.mosi,
            PinRole::Sclk => self.sclk,
            PinRole::Cs => self.cs,
            PinRole::Dc => self.dc,
            PinRole::Rst => self.rst,
            PinRole::Bl => self.bl,
        }
    }

    /// Every line paired with its role, in [`PinRole::ALL`] order
    pub const fn entries(&self) -> [(PinRole, Pin); 6] {
        [
            (PinRole::Mosi, self.mosi),
            (PinRole::Sclk, self.sclk),
            (PinRole::Cs, self.cs),
            (PinRole::Dc, self.dc),
            (PinRole::Rst, self.rst),
            (PinRole::Bl, self.bl),
        ]
    }

    /// Required lines are connected, numbers are in range and no GPIO is
    /// used twice
    pub const fn check(&self) -> Result<(), SetupError> {
        let entries = self.entries();
        let mut i = 0;
        while i < entries.len() {
            let (role, pin) = entries[i];
            match pin {
                Pin::NotConnected => {
                    if role.is_required() {
                        return Err(SetupError::RequiredPinMissing(role));
                    }
                }
                Pin::Gpio(gpio) => {
                    if gpio > MAX_GPIO {
                        return Err(SetupError::PinOutOfRange { role, gpio });
                    }
                    let mut j = i + 1;
                    while j < entries.len() {
                        let (other, other_pin) = entries[j];
                        if let Pin::Gpio(other_gpio) = other_pin {
                            if other_gpio == gpio {
                                return Err(SetupError::DuplicatePin {
                                    first: role,
                                    second: other,
                                    gpio,
                                });
                            }
                        }
                        j += 1;
                    }
                }
            }
            i += 1;
        }
        Ok(())
    }
}
