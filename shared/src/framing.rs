//! Serial line framing
//!
//! The controller enumerates as a USB CDC device, so the line settings are
//! mostly nominal, but the host still has to ask for 115200-8-N-1. Only the
//! baud rate is adjustable; the character format is fixed by the firmware.

use std::fmt;

use crate::defaults;

/// Line parameters for the serial connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialFraming {
    pub baud_rate: u32,
}

impl SerialFraming {
    /// Data bits per character
    pub const DATA_BITS: u8 = 8;

    /// Parity letter in the usual `8-N-1` notation
    pub const PARITY: char = 'N';

    /// Stop bits per character
    pub const STOP_BITS: u8 = 1;
}

impl Default for SerialFraming {
    fn default() -> Self {
        Self {
            baud_rate: defaults::BAUD_RATE,
        }
    }
}

impl fmt::Display for SerialFraming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.baud_rate,
            Self::DATA_BITS,
            Self::PARITY,
            Self::STOP_BITS
        )
    }
}
