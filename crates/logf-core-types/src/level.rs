//! Severity levels for emitted messages
//!
//! Levels order naturally (`Trace < Debug < ... < Error`) so the emission
//! gate can compare a message's level against a configured minimum.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Severity of an emitted message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Canonical uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Numeric severity, matching the conventional 10/20/30/40/50 scale
    pub fn severity(&self) -> u8 {
        match self {
            Level::Trace => 5,
            Level::Debug => 10,
            Level::Info => 20,
            Level::Warn => 30,
            Level::Error => 40,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Debug
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A level string that is neither a recognized name nor a numeric severity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized level: {value}")]
pub struct ParseLevelError {
    pub value: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level from a case-insensitive name or a numeric severity.
    ///
    /// Accepted names: `trace`, `debug`, `info`, `warn`/`warning`,
    /// `error`/`critical`. Accepted numbers: the 5/10/20/30/40/50 scale,
    /// with 50 mapping to `Error`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return match n {
                5 => Ok(Level::Trace),
                10 => Ok(Level::Debug),
                20 => Ok(Level::Info),
                30 => Ok(Level::Warn),
                40 | 50 => Ok(Level::Error),
                _ => Err(ParseLevelError {
                    value: trimmed.to_string(),
                }),
            };
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "ERROR" | "CRITICAL" => Ok(Level::Error),
            _ => Err(ParseLevelError {
                value: trimmed.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_default_is_debug() {
        assert_eq!(Level::default(), Level::Debug);
    }

    #[test]
    fn test_parse_names_case_insensitive() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("critical".parse::<Level>().unwrap(), Level::Error);
    }

    #[test]
    fn test_parse_numeric_severities() {
        assert_eq!("10".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("20".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("50".parse::<Level>().unwrap(), Level::Error);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("loud".parse::<Level>().is_err());
        assert!("11".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
        ] {
            let parsed: Level = level.to_string().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }
}
