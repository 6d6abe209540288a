//! Command tokens and the firmware's known vocabulary
//!
//! A token is whatever the caller asked to send. The firmware only reacts to
//! four-byte tokens of the form:
//! ```text
//! [ 'S' ][ server slot '1'..'4' ][ action "RS" | "PS" | "PL" ]
//! ```
//! compared after ASCII upper-casing. Anything else is echoed back and ignored.

use bytes::Bytes;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::timing;

/// Number of server slots wired to the controller
pub const SERVER_SLOTS: u8 = 4;

/// Exact length of a token the firmware will act on
pub const TOKEN_LEN: usize = 4;

/// Errors produced when a token is not part of the known vocabulary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Command must be {TOKEN_LEN} bytes, got {0}")]
    WrongLength(usize),

    #[error("Command must start with 'S', got {0:?}")]
    MissingPrefix(char),

    #[error("Unknown server slot {0:?} (expected 1-{SERVER_SLOTS})")]
    UnknownServer(char),

    #[error("Unknown switch action {0:?} (expected RS, PS or PL)")]
    UnknownAction(String),
}

/// Which switch the firmware presses, and for how long
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchAction {
    /// Reset switch
    Reset,
    /// Power switch, short press
    PowerShort,
    /// Power switch, long press
    PowerLong,
}

impl SwitchAction {
    pub const ALL: [SwitchAction; 3] = [Self::Reset, Self::PowerShort, Self::PowerLong];

    /// Two-letter code used on the wire
    pub fn code(self) -> &'static str {
        match self {
            Self::Reset => "RS",
            Self::PowerShort => "PS",
            Self::PowerLong => "PL",
        }
    }

    /// How long the firmware holds the switch closed
    pub fn press_ms(self) -> u32 {
        match self {
            Self::Reset => timing::RESET_PRESS_MS,
            Self::PowerShort => timing::POWER_SHORT_PRESS_MS,
            Self::PowerLong => timing::POWER_LONG_PRESS_MS,
        }
    }

    fn from_code(code: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.code().as_bytes().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for SwitchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Reset => "Reset Switch",
            Self::PowerShort => "Power Switch Short",
            Self::PowerLong => "Power Switch Long",
        };
        f.write_str(name)
    }
}

/// A token from the known vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnownCommand {
    /// Server slot, 1-based
    pub server: u8,
    pub action: SwitchAction,
}

impl KnownCommand {
    /// Every command the firmware understands, in slot order
    pub fn all() -> impl Iterator<Item = KnownCommand> {
        (1..=SERVER_SLOTS).flat_map(|server| {
            SwitchAction::ALL
                .into_iter()
                .map(move |action| KnownCommand { server, action })
        })
    }

    /// Human-readable description, e.g. "Server 1 Power Switch Short"
    pub fn describe(&self) -> String {
        format!("Server {} {}", self.server, self.action)
    }
}

impl fmt::Display for KnownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}{}", self.server, self.action.code())
    }
}

impl FromStr for KnownCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.as_bytes();
        if raw.len() != TOKEN_LEN {
            return Err(ParseCommandError::WrongLength(raw.len()));
        }

        if !raw[0].eq_ignore_ascii_case(&b'S') {
            return Err(ParseCommandError::MissingPrefix(first_char(s)));
        }

        let server = match raw[1] {
            digit @ b'1'..=b'4' => digit - b'0',
            _ => {
                let slot = s.get(1..).map(first_char).unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseCommandError::UnknownServer(slot));
            }
        };

        let action = SwitchAction::from_code(&raw[2..]).ok_or_else(|| {
            ParseCommandError::UnknownAction(String::from_utf8_lossy(&raw[2..]).into_owned())
        })?;

        Ok(Self { server, action })
    }
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// The string handed to the relay, forwarded without validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandToken(String);

impl CommandToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// UTF-8 bytes exactly as they go on the wire
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Owned copy of the wire bytes
    pub fn to_frame(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    /// Look the token up in the firmware vocabulary
    pub fn known(&self) -> Result<KnownCommand, ParseCommandError> {
        self.0.parse()
    }
}

impl fmt::Display for CommandToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CommandToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
