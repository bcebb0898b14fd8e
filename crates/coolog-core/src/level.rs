//! Severity levels and threshold semantics

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Message severity, also used as a logger's active threshold.
///
/// Ordering is ascending in urgency starting at `Debug`. `Off` is a
/// sentinel threshold meaning "suppress everything" and is not meant to be
/// attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off = 0,
    Debug = 1,
    Info = 2,
    Warning = 3,
    Error = 4,
}

impl Severity {
    /// Uppercase tag used in formatted entries.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Off => "LOGOFF",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    /// Convert from the numeric representation.
    ///
    /// Returns `None` for out-of-range values; callers that need a
    /// printable tag for those should render them as `UNKNOWN`.
    pub fn from_repr(value: u8) -> Option<Severity> {
        match value {
            0 => Some(Severity::Off),
            1 => Some(Severity::Debug),
            2 => Some(Severity::Info),
            3 => Some(Severity::Warning),
            4 => Some(Severity::Error),
            _ => None,
        }
    }

    /// Whether a message at `level` passes this threshold.
    ///
    /// An `Off` threshold permits nothing. A `Debug` threshold permits
    /// exactly `Debug`, not debug-and-above. Every other threshold permits
    /// levels numerically at or above itself.
    pub fn permits(self, level: Severity) -> bool {
        if self == Severity::Off {
            return false;
        }
        if self == Severity::Debug {
            return level == Severity::Debug;
        }
        level >= self
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" | "logoff" => Ok(Severity::Off),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}
