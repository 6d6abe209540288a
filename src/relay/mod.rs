//! The command relay
//!
//! This module handles:
//! - Checking the command argument
//! - Opening the serial device and writing the token
//! - Recording the attempt to the log
//! - Reporting a typed outcome for exit-status mapping

mod command_relay;
mod error;

pub use command_relay::{CommandRelay, RelayReport, RelayStage};
pub use error::RelayError;
