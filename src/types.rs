use core::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Connection state of an output as reported by `xrandr -q`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OutputState {
    Connected,
    Disconnected,
}

impl OutputState {
    pub fn is_connected(&self) -> bool {
        *self == OutputState::Connected
    }
}

impl fmt::Display for OutputState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputState::Connected => write!(f, "connected"),
            OutputState::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Errors that occur while parsing an output state from a string
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseOutputStateError {
    #[error("Unknown output state: {0}")]
    UnknownState(String),
}

impl FromStr for OutputState {
    type Err = ParseOutputStateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "connected" => Ok(OutputState::Connected),
            "disconnected" => Ok(OutputState::Disconnected),
            _ => Err(ParseOutputStateError::UnknownState(s.to_string())),
        }
    }
}

/// A display mode as listed below an output header, e.g. `1920x1080`
///
/// Only the leading token of a mode line is kept; refresh rates and the `*`/`+` markers are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mode(String);

impl Mode {
    /// Creates a mode from its textual name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Extracts the mode from one indented mode line. Blank lines yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        line.split_whitespace().next().map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
