//! Numeric inputs accepted by converters and formatters
//!
//! Three kinds are supported: machine integers, binary floats and
//! arbitrary precision decimals (dashu-float `DBig`). Nothing here performs
//! arithmetic beyond what formatting and rounding need.

use crate::decimal::DecimalParts;
use crate::error::{Result, YardstickError};
use dashu_base::Approximation;
use dashu_float::DBig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the supported numeric kinds a `Number` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    Int,
    Float,
    Decimal,
}

/// A numeric value of one of the supported kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "NumberRepr", try_from = "NumberRepr")]
pub enum Number {
    Int(i64),
    Float(f64),
    Decimal(DBig),
}

impl Number {
    // ========== Construction ==========

    pub fn from_i64(n: i64) -> Self {
        Number::Int(n)
    }

    pub fn from_f64(f: f64) -> Self {
        Number::Float(f)
    }

    /// Parse an arbitrary precision decimal: "123", "-3.14", "1.5e10"
    pub fn from_decimal_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let inner = DBig::from_str(s).map_err(|e| {
            YardstickError::invalid_value(format!("'{}' is not a decimal: {}", s, e))
        })?;
        Ok(Number::Decimal(inner))
    }

    // ========== Predicates ==========

    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Int(_) => NumberKind::Int,
            Number::Float(_) => NumberKind::Float,
            Number::Decimal(_) => NumberKind::Decimal,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Number::Int(_) => "Int",
            Number::Float(_) => "Float",
            Number::Decimal(_) => "Decimal",
        }
    }

    /// True only for the `Int` kind, a float holding `3.0` is still a float
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    // ========== Conversion ==========

    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Decimal(d) => match d.to_f64() {
                Approximation::Exact(v) => v,
                Approximation::Inexact(v, _) => v,
            },
        }
    }

    /// Exact base-10 view; floats use their shortest round-trip rendering
    pub fn decimal_parts(&self) -> Option<DecimalParts> {
        match self {
            Number::Int(i) => Some(DecimalParts::from_i64(*i)),
            Number::Float(f) => DecimalParts::from_f64(*f),
            Number::Decimal(d) => DecimalParts::from_dbig(d),
        }
    }

    /// Integer part, discarding any fraction
    pub fn truncate(&self) -> Result<i128> {
        match self {
            Number::Int(i) => Ok(*i as i128),
            Number::Float(f) => {
                if !f.is_finite() {
                    return Err(YardstickError::invalid_value(format!("cannot truncate {}", f)));
                }
                let t = f.trunc();
                if t.abs() >= i128::MAX as f64 {
                    return Err(YardstickError::Overflow);
                }
                Ok(t as i128)
            }
            Number::Decimal(d) => {
                let parts = DecimalParts::from_dbig(d).ok_or_else(|| {
                    YardstickError::invalid_value(format!("cannot truncate {}", d))
                })?;
                parts.truncate_i128().ok_or(YardstickError::Overflow)
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(v) => write!(f, "{}", v),
            Number::Decimal(d) => write!(f, "{}", decimal_string(d)),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::Int(n as i64)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

impl From<DBig> for Number {
    fn from(d: DBig) -> Self {
        Number::Decimal(d)
    }
}

/// Wire form: decimals travel as strings so no digits are lost
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
enum NumberRepr {
    Int(i64),
    Float(f64),
    Decimal(String),
}

impl From<Number> for NumberRepr {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => NumberRepr::Int(i),
            Number::Float(f) => NumberRepr::Float(f),
            Number::Decimal(d) => NumberRepr::Decimal(decimal_string(&d)),
        }
    }
}

impl TryFrom<NumberRepr> for Number {
    type Error = YardstickError;

    fn try_from(repr: NumberRepr) -> Result<Self> {
        match repr {
            NumberRepr::Int(i) => Ok(Number::Int(i)),
            NumberRepr::Float(f) => Ok(Number::Float(f)),
            NumberRepr::Decimal(s) => Number::from_decimal_str(&s),
        }
    }
}

fn decimal_string(d: &DBig) -> String {
    DecimalParts::from_dbig(d)
        .map(|p| p.to_plain_string())
        .unwrap_or_else(|| d.to_string())
}
