//! Half-away-from-zero rounding on exact decimal digits

use tracing::warn;
use yardstick_core::{DecimalParts, Number, Result, Value, YardstickError};

pub use yardstick_core::MAX_PLACES;

/// Fixed-point digits of `n` rounded to `places`: (negative, integer, fraction).
///
/// Every finite input goes through its exact decimal digits, so `2.675`
/// gives `2.68`. Non-finite floats have no digits and fall back to native
/// float formatting.
pub(crate) fn fixed_digits(n: &Number, places: u32) -> FixedDigits {
    match n.decimal_parts() {
        Some(parts) => {
            let (negative, int_part, frac_part) = parts.split_fixed(places);
            FixedDigits::Exact { negative, int_part, frac_part }
        }
        None => {
            warn!(value = %n, places, "no decimal view, using float formatting");
            FixedDigits::Native(format!("{:.*}", places as usize, n.to_f64()))
        }
    }
}

pub(crate) enum FixedDigits {
    Exact { negative: bool, int_part: String, frac_part: String },
    /// Already rendered (`inf`, `NaN`)
    Native(String),
}

/// Round a number, or a numeric string, to `places` decimals.
///
/// A `,` inside a string is read as the decimal mark. The result is an
/// `Int` when it is integral and `force_float` is false, otherwise a
/// `Float`. Places beyond `MAX_PLACES` are capped.
pub fn round_to_places(value: &Value, places: u32, force_float: bool) -> Result<Number> {
    let places = places.min(MAX_PLACES);
    let parts = match value {
        Value::Number(n) => n.decimal_parts(),
        Value::Text(s) => {
            let f: f64 = s
                .trim()
                .replace(',', ".")
                .parse()
                .map_err(|_| YardstickError::invalid_value(format!("'{}' is not numeric", s)))?;
            DecimalParts::from_f64(f)
        }
        other => return Err(YardstickError::type_mismatch("Number", other.type_name())),
    };

    let parts = parts.ok_or_else(|| {
        YardstickError::invalid_value(format!(
            "cannot round {} to {} places",
            value_label(value),
            places
        ))
    })?;

    let rounded = parts.round_half_away(places);
    if !force_float && rounded.is_integral() {
        if let Some(i) = rounded.truncate_i128().and_then(|i| i64::try_from(i).ok()) {
            return Ok(Number::Int(i));
        }
    }
    Ok(Number::Float(rounded.to_f64()))
}

fn value_label(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Text(s) => s.clone(),
        other => other.type_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yardstick_core::codes;

    #[test]
    fn test_boundary_rounds_away() {
        assert_eq!(round_to_places(&Value::from(2.675), 2, false).unwrap(), Number::Float(2.68));
        assert_eq!(round_to_places(&Value::from(-2.675), 2, false).unwrap(), Number::Float(-2.68));
        assert_eq!(round_to_places(&Value::from(0.5), 0, false).unwrap(), Number::Int(1));
    }

    #[test]
    fn test_integral_result() {
        assert_eq!(round_to_places(&Value::from(3.001), 2, false).unwrap(), Number::Int(3));
        assert_eq!(round_to_places(&Value::from(3.001), 2, true).unwrap(), Number::Float(3.0));
        assert_eq!(round_to_places(&Value::from(7i64), 2, false).unwrap(), Number::Int(7));
    }

    #[test]
    fn test_comma_string() {
        assert_eq!(round_to_places(&Value::from("1,235"), 2, false).unwrap(), Number::Float(1.24));
        let err = round_to_places(&Value::from("abc"), 2, false).unwrap_err();
        assert_eq!(err.code(), codes::VALUE_ERROR);
    }

    #[test]
    fn test_decimal_input() {
        let d = Number::from_decimal_str("1.005").unwrap();
        assert_eq!(round_to_places(&Value::from(d), 2, false).unwrap(), Number::Float(1.01));
    }

    #[test]
    fn test_null_and_bool_rejected() {
        assert_eq!(round_to_places(&Value::Null, 2, false).unwrap_err().code(), codes::TYPE_ERROR);
        let err = round_to_places(&Value::from(true), 2, false).unwrap_err();
        assert_eq!(err.code(), codes::TYPE_ERROR);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(round_to_places(&Value::from(f64::INFINITY), 2, false).is_err());
    }

    #[test]
    fn test_fixed_digits() {
        match fixed_digits(&Number::Float(1234.5), 2) {
            FixedDigits::Exact { negative, int_part, frac_part } => {
                assert!(!negative);
                assert_eq!(int_part, "1234");
                assert_eq!(frac_part, "50");
            }
            FixedDigits::Native(s) => panic!("unexpected native rendering {}", s),
        }
        assert!(matches!(fixed_digits(&Number::Float(f64::NAN), 2), FixedDigits::Native(_)));
    }
}
