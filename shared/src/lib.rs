//! ATX Switch Controller Shared Types
//!
//! This crate provides the command vocabulary and serial framing shared between
//! the host-side relay and anything else that talks to the ATX switch firmware.

pub mod command;
pub mod framing;

pub use command::{CommandToken, KnownCommand, ParseCommandError, SwitchAction};
pub use framing::SerialFraming;

/// Fixed values the relay uses when nothing else is configured
pub mod defaults {
    /// Serial device the controller enumerates as (usually a persistent symlink)
    pub const DEVICE_PATH: &str = "/dev/ttyACM0";

    /// Line speed expected by the firmware
    pub const BAUD_RATE: u32 = 115_200;

    /// I/O timeout for the serial port in milliseconds
    pub const TIMEOUT_MS: u64 = 1000;

    /// Append-only attempt log
    pub const LOG_PATH: &str = "/tmp/send-atx-command.log";
}

/// Firmware-side timings, kept here so descriptions can report them
pub mod timing {
    /// How long the reset switch is held
    pub const RESET_PRESS_MS: u32 = 100;

    /// Short power switch press
    pub const POWER_SHORT_PRESS_MS: u32 = 100;

    /// Long power switch press (forces power-off on most boards)
    pub const POWER_LONG_PRESS_MS: u32 = 5000;
}
