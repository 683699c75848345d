//! String -> number, the inverse of `format`

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;
use yardstick_core::{Batch, Number, Result, Value, YardstickError};

use crate::roman::from_roman;
use crate::style::{FormatSpec, Style};

/// Numeric kind a parse must produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseAs {
    /// Truncates any fractional part
    Int,
    Float,
    Decimal,
}

/// Parse one string or a sequence, answering in the same shape
pub fn parse(
    input: impl Into<Batch<String>>,
    spec: &FormatSpec,
    parse_as: Option<ParseAs>,
) -> Result<Batch<Number>> {
    let input = input.into();
    trace!(style = %spec.style, count = input.len(), "parsing");
    input.try_map(|text| parse_str(&text, spec, parse_as))
}

/// Parse a dynamically typed value, which must be text
pub fn parse_value(value: &Value, spec: &FormatSpec, parse_as: Option<ParseAs>) -> Result<Number> {
    let text = value
        .as_text()
        .ok_or_else(|| YardstickError::type_mismatch("Text", value.type_name()))?;
    parse_str(text, spec, parse_as)
}

pub fn parse_str(text: &str, spec: &FormatSpec, parse_as: Option<ParseAs>) -> Result<Number> {
    let body = strip_affixes(text, &spec.prefix, &spec.suffix);
    match spec.style {
        Style::Binary => parse_radix(body, 2, "0b"),
        Style::Hex => parse_radix(body, 16, "0x"),
        Style::Roman => {
            let n = from_roman(body.trim())?;
            i64::try_from(n).map(Number::Int).map_err(|_| YardstickError::Overflow)
        }
        Style::Plain | Style::Scientific | Style::Percent => parse_plain(body, spec, parse_as),
    }
}

/// Remove a literal prefix and suffix when present; absent ones are fine
fn strip_affixes<'a>(text: &'a str, prefix: &str, suffix: &str) -> &'a str {
    let text = if prefix.is_empty() { text } else { text.strip_prefix(prefix).unwrap_or(text) };
    if suffix.is_empty() {
        text
    } else {
        text.strip_suffix(suffix).unwrap_or(text)
    }
}

/// Optional sign, optional `0b`/`0x` marker, then digits in `radix`
fn parse_radix(text: &str, radix: u32, marker: &str) -> Result<Number> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits = rest
        .strip_prefix(marker)
        .or_else(|| rest.strip_prefix(&marker.to_ascii_uppercase()))
        .unwrap_or(rest);

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(invalid(text, "no digits"));
    }
    let magnitude = u128::from_str_radix(digits, radix).map_err(|e| invalid(text, e))?;
    let magnitude = i128::try_from(magnitude).map_err(|_| YardstickError::Overflow)?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).map(Number::Int).map_err(|_| YardstickError::Overflow)
}

fn parse_plain(text: &str, spec: &FormatSpec, parse_as: Option<ParseAs>) -> Result<Number> {
    let mut cleaned = text.trim().to_string();
    if !spec.thousands_separator.is_empty() {
        cleaned = cleaned.replace(&spec.thousands_separator, "");
    }
    if !spec.decimal_separator.is_empty() {
        cleaned = cleaned.replace(&spec.decimal_separator, ".");
    }

    match parse_as {
        Some(ParseAs::Int) => parse_truncated(&cleaned).map_err(|e| wrap(text, e)),
        Some(ParseAs::Float) => cleaned
            .parse::<f64>()
            .map(Number::Float)
            .map_err(|e| invalid(text, e)),
        Some(ParseAs::Decimal) => Number::from_decimal_str(&cleaned).map_err(|e| wrap(text, e)),
        None => cleaned
            .parse::<f64>()
            .map(Number::Float)
            .or_else(|_| cleaned.parse::<i64>().map(Number::Int))
            .or_else(|_| Number::from_decimal_str(&cleaned))
            .map_err(|e| wrap(text, e)),
    }
}

/// Float parse, then toward zero
fn parse_truncated(cleaned: &str) -> Result<Number> {
    let f: f64 = cleaned
        .parse()
        .map_err(|e| YardstickError::invalid_value(format!("{}", e)))?;
    if !f.is_finite() {
        return Err(YardstickError::invalid_value(format!("{} has no integer value", f)));
    }
    let t = f.trunc();
    if t < i64::MIN as f64 || t >= i64::MAX as f64 {
        return Err(YardstickError::Overflow);
    }
    Ok(Number::Int(t as i64))
}

fn invalid(text: &str, cause: impl fmt::Display) -> YardstickError {
    YardstickError::invalid_value(format!("could not parse '{}' as a number: {}", text, cause))
}

fn wrap(text: &str, err: YardstickError) -> YardstickError {
    match err {
        YardstickError::Overflow => YardstickError::Overflow,
        YardstickError::InvalidValue(cause) => invalid(text, cause),
        other => invalid(text, other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yardstick_core::codes;

    #[test]
    fn test_plain_non_anglo() {
        let n = parse_str("1.234.567,89", &FormatSpec::default(), None).unwrap();
        assert_eq!(n, Number::Float(1234567.89));
    }

    #[test]
    fn test_enforced_kinds() {
        let spec = FormatSpec::anglo();
        assert_eq!(parse_str("1,234.99", &spec, Some(ParseAs::Int)).unwrap(), Number::Int(1234));
        assert_eq!(parse_str("-7.9", &spec, Some(ParseAs::Int)).unwrap(), Number::Int(-7));
        assert_eq!(parse_str("2.5", &spec, Some(ParseAs::Float)).unwrap(), Number::Float(2.5));
        let d = parse_str("1,234.005", &spec, Some(ParseAs::Decimal)).unwrap();
        assert_eq!(d, Number::from_decimal_str("1234.005").unwrap());
    }

    #[test]
    fn test_affixes_stripped_when_present() {
        let spec = FormatSpec::anglo().with_prefix("$").with_suffix(" USD");
        assert_eq!(parse_str("$1,000.50 USD", &spec, None).unwrap(), Number::Float(1000.5));
        assert_eq!(parse_str("1,000.50", &spec, None).unwrap(), Number::Float(1000.5));
    }

    #[test]
    fn test_binary_and_hex() {
        let bin = FormatSpec::default().with_style(Style::Binary);
        let hex = FormatSpec::default().with_style(Style::Hex);
        assert_eq!(parse_str("0b1010", &bin, None).unwrap(), Number::Int(10));
        assert_eq!(parse_str("1010", &bin, None).unwrap(), Number::Int(10));
        assert_eq!(parse_str("-0b101", &bin, None).unwrap(), Number::Int(-5));
        assert_eq!(parse_str("0xff", &hex, None).unwrap(), Number::Int(255));
        assert_eq!(parse_str("-0XFF", &hex, None).unwrap(), Number::Int(-255));
    }

    #[test]
    fn test_malformed_digits() {
        let bin = FormatSpec::default().with_style(Style::Binary);
        assert_eq!(parse_str("0b102", &bin, None).unwrap_err().code(), codes::VALUE_ERROR);
        assert_eq!(parse_str("0b", &bin, None).unwrap_err().code(), codes::VALUE_ERROR);
        assert_eq!(parse_str("0b+1", &bin, None).unwrap_err().code(), codes::VALUE_ERROR);
    }

    #[test]
    fn test_roman() {
        let spec = FormatSpec::default().with_style(Style::Roman).with_prefix("Year ");
        assert_eq!(parse_str("Year MCMLXXXIV", &spec, None).unwrap(), Number::Int(1984));
    }

    #[test]
    fn test_not_a_number() {
        let err = parse_str("twelve", &FormatSpec::default(), None).unwrap_err();
        assert_eq!(err.code(), codes::VALUE_ERROR);
        assert!(err.to_string().contains("twelve"));
    }

    #[test]
    fn test_parse_value_requires_text() {
        let err = parse_value(&Value::from(3i64), &FormatSpec::default(), None).unwrap_err();
        assert_eq!(err.code(), codes::TYPE_ERROR);
    }

    #[test]
    fn test_batch() {
        let out = parse(vec!["1.000", "2,5"], &FormatSpec::default(), None).unwrap();
        assert_eq!(out, Batch::Sequence(vec![Number::Float(1000.0), Number::Float(2.5)]));
    }
}
