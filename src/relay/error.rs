//! Relay failure taxonomy

use super::RelayStage;
use std::io;
use thiserror::Error;

/// Ways a relay attempt can fail
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("No command argument supplied")]
    MissingArgument,

    #[error("Invalid command line: {0}")]
    InvalidArguments(String),

    #[error("Cannot open serial port {device}: {source}")]
    DeviceUnavailable { device: String, source: io::Error },

    #[error("Failed to write to serial port {device}: {source}")]
    WriteFailure { device: String, source: io::Error },
}

impl RelayError {
    /// Process exit status for this failure
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingArgument => 2,
            Self::DeviceUnavailable { .. } => 3,
            Self::WriteFailure { .. } => 4,
            Self::InvalidArguments(_) => 5,
        }
    }

    /// Stage the relay was in when it failed
    pub fn stage(&self) -> RelayStage {
        match self {
            Self::MissingArgument | Self::InvalidArguments(_) => RelayStage::ArgumentCheck,
            Self::DeviceUnavailable { .. } => RelayStage::Open,
            Self::WriteFailure { .. } => RelayStage::Write,
        }
    }

    /// Underlying I/O error, if any
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::MissingArgument | Self::InvalidArguments(_) => None,
            Self::DeviceUnavailable { source, .. } | Self::WriteFailure { source, .. } => {
                Some(source.kind())
            }
        }
    }
}
