//! Yardstick Core - Fundamental types
//!
//! This crate provides the types shared by every Yardstick crate:
//! - `Number`: integer, float or arbitrary precision decimal input
//! - `DecimalParts`: exact base-10 view used for half-away rounding
//! - `Value`: dynamically typed input cell
//! - `Batch`: one value or an ordered sequence of values
//! - `YardstickError`: structured errors with machine-readable codes

mod batch;
mod decimal;
mod error;
mod number;
mod value;

pub use batch::Batch;
pub use decimal::{DecimalParts, MAX_EXPONENT, MAX_PLACES};
pub use error::{codes, Result, UnitSide, YardstickError};
pub use number::{Number, NumberKind};
pub use value::Value;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Batch, Number, NumberKind, Value, YardstickError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_from_i64() {
            let v: Value = 42i64.into();
            assert!(matches!(v, Value::Number(Number::Int(42))));
        }

        #[test]
        fn test_from_str() {
            let v: Value = "hello".into();
            assert_eq!(v.as_text(), Some("hello"));
            assert!(v.as_number().is_none());
        }

        #[test]
        fn test_from_option() {
            let v: Value = None::<f64>.into();
            assert_eq!(v, Value::Null);
            let v: Value = Some(1.5).into();
            assert_eq!(v.as_number(), Some(&Number::Float(1.5)));
        }

        #[test]
        fn test_type_name() {
            assert_eq!(Value::Number(Number::from_i64(0)).type_name(), "Number");
            assert_eq!(Value::Text(String::new()).type_name(), "Text");
            assert_eq!(Value::Bool(true).type_name(), "Bool");
            assert_eq!(Value::Null.type_name(), "Null");
        }

        #[test]
        fn test_expect_number_names_kind() {
            let err = Value::from("abc").expect_number().unwrap_err();
            assert_eq!(err.code(), codes::TYPE_ERROR);
            assert_eq!(err.to_string(), "Expected Number, got Text");
        }
    }

    mod serde_tests {
        use super::*;

        #[test]
        fn test_decimal_travels_as_string() {
            let n = Number::from_decimal_str("12.5").unwrap();
            let json = serde_json::to_string(&n).unwrap();
            assert_eq!(json, r#"{"kind":"Decimal","value":"12.5"}"#);
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), "12.5");
        }

        #[test]
        fn test_value_tagged() {
            let v = Value::from(3i64);
            let json = serde_json::to_string(&v).unwrap();
            assert_eq!(json, r#"{"type":"Number","value":{"kind":"Int","value":3}}"#);
        }

        #[test]
        fn test_batch_untagged() {
            let b: Batch<f64> = vec![1.5_f64, 2.0].into();
            assert_eq!(serde_json::to_string(&b).unwrap(), "[1.5,2.0]");
            let s: Batch<f64> = serde_json::from_str("4.0").unwrap();
            assert_eq!(s, Batch::Scalar(4.0));
        }
    }
}
