//! Structured errors shared by every Yardstick crate
//!
//! Errors are plain values scoped to a single call. Each one carries a
//! machine-readable code and, where useful, a hint for fixing the input.

use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const TYPE_ERROR: &str = "TYPE_ERROR";
    pub const VALUE_ERROR: &str = "VALUE_ERROR";
    pub const DATE_PARSE_ERROR: &str = "DATE_PARSE_ERROR";
    pub const UNKNOWN_TIMEZONE: &str = "UNKNOWN_TIMEZONE";
    pub const CONFIG_CONFLICT: &str = "CONFIG_CONFLICT";
    pub const OVERFLOW: &str = "OVERFLOW";
}

/// Which side of a conversion named the bad unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSide {
    Source,
    Target,
}

impl fmt::Display for UnitSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSide::Source => write!(f, "Source"),
            UnitSide::Target => write!(f, "Target"),
        }
    }
}

/// Error type for all Yardstick operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum YardstickError {
    #[error("{side} unit not supported for {quantity}: {unit}")]
    UnknownUnit {
        side: UnitSide,
        unit: String,
        quantity: String,
        /// Units the quantity does accept, in table order
        known: Vec<String>,
    },

    #[error("Expected {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Unable to parse date string: '{0}'")]
    DateParse(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimeZone(String),

    #[error("Configuration conflict: {0}")]
    ConfigConflict(String),

    #[error("Overflow: result too large")]
    Overflow,
}

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, YardstickError>;

impl YardstickError {
    pub fn unknown_unit(
        side: UnitSide,
        unit: impl Into<String>,
        quantity: impl Into<String>,
        known: &[&str],
    ) -> Self {
        Self::UnknownUnit {
            side,
            unit: unit.into(),
            quantity: quantity.into(),
            known: known.iter().map(|u| u.to_string()).collect(),
        }
    }

    pub fn type_mismatch(expected: &'static str, got: impl Into<String>) -> Self {
        Self::TypeMismatch { expected, got: got.into() }
    }

    pub fn invalid_value(details: impl Into<String>) -> Self {
        Self::InvalidValue(details.into())
    }

    pub fn config_conflict(details: impl Into<String>) -> Self {
        Self::ConfigConflict(details.into())
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            Self::TypeMismatch { .. } => codes::TYPE_ERROR,
            Self::InvalidValue(_) => codes::VALUE_ERROR,
            Self::DateParse(_) => codes::DATE_PARSE_ERROR,
            Self::UnknownTimeZone(_) => codes::UNKNOWN_TIMEZONE,
            Self::ConfigConflict(_) => codes::CONFIG_CONFLICT,
            Self::Overflow => codes::OVERFLOW,
        }
    }

    /// Short hint for fixing the input, if there is one
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnknownUnit { quantity, known, .. } if !known.is_empty() => {
                Some(format!("Valid {} units: {}", quantity, known.join(", ")))
            }
            Self::TypeMismatch { expected, .. } => {
                Some(format!("Convert value to {} first", expected))
            }
            Self::DateParse(_) => {
                Some("Use YYYY-MM-DD, YYYY-MM-DD HH:MM:SS or an ISO 8601 timestamp".to_string())
            }
            Self::UnknownTimeZone(_) => {
                Some("Use an IANA zone name such as \"UTC\" or \"Europe/Paris\"".to_string())
            }
            Self::ConfigConflict(_) => {
                Some("Use distinct, non-reserved thousands and decimal separators".to_string())
            }
            _ => None,
        }
    }

    /// Unit string named by an `UnknownUnit` error
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::UnknownUnit { unit, .. } => Some(unit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_unit_message() {
        let err = YardstickError::unknown_unit(UnitSide::Source, "bogus", "length", &["m", "cm"]);
        assert_eq!(err.to_string(), "Source unit not supported for length: bogus");
        assert_eq!(err.code(), codes::UNKNOWN_UNIT);
        assert_eq!(err.unit(), Some("bogus"));
        assert_eq!(err.suggestion().unwrap(), "Valid length units: m, cm");
    }

    #[test]
    fn test_codes() {
        assert_eq!(YardstickError::type_mismatch("Number", "Text").code(), codes::TYPE_ERROR);
        assert_eq!(YardstickError::invalid_value("x").code(), codes::VALUE_ERROR);
        assert_eq!(YardstickError::config_conflict("x").code(), codes::CONFIG_CONFLICT);
        assert_eq!(YardstickError::Overflow.code(), codes::OVERFLOW);
        assert!(YardstickError::Overflow.suggestion().is_none());
    }
}
