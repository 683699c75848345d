//! Affine temperature scales, pivoting through Celsius

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yardstick_core::{Result, UnitSide, YardstickError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
    #[serde(rename = "R")]
    Rankine,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 4] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
        TemperatureScale::Rankine,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "C",
            TemperatureScale::Fahrenheit => "F",
            TemperatureScale::Kelvin => "K",
            TemperatureScale::Rankine => "R",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.symbol() == symbol)
    }

    /// Resolve a scale symbol, reporting which side of the conversion named it
    pub fn resolve(symbol: &str, side: UnitSide) -> Result<Self> {
        Self::from_symbol(symbol).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|s| s.symbol()).collect();
            YardstickError::unknown_unit(side, symbol, "temperature", &known)
        })
    }

    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value,
            TemperatureScale::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value - 273.15,
            TemperatureScale::Rankine => (value - 491.67) * 5.0 / 9.0,
        }
    }

    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => celsius,
            TemperatureScale::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureScale::Kelvin => celsius + 273.15,
            TemperatureScale::Rankine => (celsius + 273.15) * 9.0 / 5.0,
        }
    }

    /// Convert `value` from this scale into `target`; same scale is a no-op
    pub fn convert(self, value: f64, target: TemperatureScale) -> f64 {
        if self == target {
            return value;
        }
        target.from_celsius(self.to_celsius(value))
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for TemperatureScale {
    type Err = YardstickError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s, UnitSide::Source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_points() {
        use TemperatureScale::*;
        assert_eq!(Celsius.convert(0.0, Fahrenheit), 32.0);
        assert_eq!(Celsius.convert(100.0, Kelvin), 373.15);
        assert_eq!(Fahrenheit.convert(212.0, Celsius), 100.0);
        assert!((Celsius.convert(0.0, Rankine) - 491.67).abs() < 1e-9);
    }

    #[test]
    fn test_same_scale_is_exact() {
        for s in TemperatureScale::ALL {
            assert_eq!(s.convert(-40.123456789, s), -40.123456789);
        }
    }

    #[test]
    fn test_resolve_reports_side() {
        let err = TemperatureScale::resolve("X", UnitSide::Target).unwrap_err();
        assert_eq!(err.to_string(), "Target unit not supported for temperature: X");
        assert_eq!(err.suggestion().unwrap(), "Valid temperature units: C, F, K, R");
    }
}
