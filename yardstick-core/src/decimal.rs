//! Exact base-10 view of numbers
//!
//! `DecimalParts` holds a sign, a string of decimal digits and a power-of-ten
//! exponent. Rounding divides the digits as an exact integer (`UBig`) and
//! fixed-point rendering splits the result, so `2.675` rounds to `2.68`
//! regardless of how the value was stored.

use dashu_float::DBig;
use dashu_int::UBig;
use std::str::FromStr;

/// Upper bound on requested fractional digits
pub const MAX_PLACES: u32 = 1000;

/// Largest power-of-ten exponent (either sign) given a digit view;
/// anything beyond has no plain rendering
pub const MAX_EXPONENT: i64 = 4096;

/// `(-1)^negative * digits * 10^exponent`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalParts {
    negative: bool,
    /// ASCII digits without leading zeros ("0" for zero)
    digits: String,
    exponent: i64,
}

impl DecimalParts {
    pub fn new(negative: bool, digits: &str, exponent: i64) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Self { negative: false, digits: "0".to_string(), exponent };
        }
        Self { negative, digits: trimmed.to_string(), exponent }
    }

    pub fn from_i64(n: i64) -> Self {
        Self::new(n < 0, &n.unsigned_abs().to_string(), 0)
    }

    /// Shortest round-trip rendering of a float, read back as decimal digits.
    /// Non-finite values have no decimal view.
    pub fn from_f64(f: f64) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }
        Self::parse(&f.to_string())
    }

    pub fn from_dbig(d: &DBig) -> Option<Self> {
        let repr = d.repr();
        if !repr.is_finite() {
            return None;
        }
        let significand = repr.significand().to_string();
        let (negative, digits) = match significand.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, significand.as_str()),
        };
        Self::bounded(negative, digits, repr.exponent() as i64)
    }

    /// Parse `[-+]digits[.digits][e[-+]digits]`
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exp_shift) = match body.find(['e', 'E']) {
            Some(pos) => (&body[..pos], body[pos + 1..].parse::<i64>().ok()?),
            None => (body, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = format!("{}{}", int_part, frac_part);
        let exponent = exp_shift.checked_sub(frac_part.len() as i64)?;
        Self::bounded(negative, &digits, exponent)
    }

    fn bounded(negative: bool, digits: &str, exponent: i64) -> Option<Self> {
        let parts = Self::new(negative, digits, exponent);
        let magnitude = parts.exponent.saturating_add(parts.digits.len() as i64);
        if parts.exponent.abs() > MAX_EXPONENT || magnitude.abs() > MAX_EXPONENT {
            return None;
        }
        Some(parts)
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// True when no non-zero digit sits right of the decimal point
    pub fn is_integral(&self) -> bool {
        if self.exponent >= 0 {
            return true;
        }
        let frac_len = (-self.exponent) as usize;
        if frac_len >= self.digits.len() {
            return self.is_zero();
        }
        self.digits[self.digits.len() - frac_len..].bytes().all(|b| b == b'0')
    }

    /// Multiply by `10^by` (exact)
    pub fn shift(&self, by: i64) -> Self {
        Self { exponent: self.exponent + by, ..self.clone() }
    }

    /// Round to `places` fractional digits, ties away from zero.
    /// Places beyond `MAX_PLACES` are capped.
    pub fn round_half_away(&self, places: u32) -> Self {
        let target = -i64::from(places.min(MAX_PLACES));

        if self.exponent >= target {
            let pad = (self.exponent - target) as usize;
            let digits = if self.is_zero() {
                "0".to_string()
            } else {
                format!("{}{}", self.digits, "0".repeat(pad))
            };
            return Self::new(self.negative, &digits, target);
        }

        // (magnitude + divisor / 2) / divisor, on exact integers
        let drop = (target - self.exponent) as usize;
        let magnitude = UBig::from_str(&self.digits).unwrap_or(UBig::ZERO);
        let divisor = UBig::from(10u8).pow(drop);
        let half = &divisor / UBig::from(2u8);
        let rounded = (magnitude + half) / divisor;
        Self::new(self.negative, &rounded.to_string(), target)
    }

    /// Round to `places` and split into (negative, integer digits, fraction digits)
    pub fn split_fixed(&self, places: u32) -> (bool, String, String) {
        let rounded = self.round_half_away(places);
        let places = places.min(MAX_PLACES) as usize;
        let mut digits = rounded.digits.clone();
        if digits.len() <= places {
            digits = format!("{}{}", "0".repeat(places + 1 - digits.len()), digits);
        }
        let split = digits.len() - places;
        let (int_part, frac_part) = digits.split_at(split);
        (rounded.negative, int_part.to_string(), frac_part.to_string())
    }

    /// Exact plain rendering, e.g. `-1234.500`
    pub fn to_plain_string(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        if self.exponent >= 0 {
            if self.is_zero() {
                return "0".to_string();
            }
            return format!("{}{}{}", sign, self.digits, "0".repeat(self.exponent as usize));
        }
        let (_, int_part, frac_part) = self.split_fixed((-self.exponent) as u32);
        format!("{}{}.{}", sign, int_part, frac_part)
    }

    pub fn to_f64(&self) -> f64 {
        let sign = if self.negative { "-" } else { "" };
        format!("{}{}e{}", sign, self.digits, self.exponent)
            .parse()
            .unwrap_or(f64::NAN)
    }

    /// Integer part (toward zero), if it fits in `i128`
    pub fn truncate_i128(&self) -> Option<i128> {
        let int_digits = if self.exponent >= 0 {
            if self.is_zero() {
                "0".to_string()
            } else {
                format!("{}{}", self.digits, "0".repeat(usize::try_from(self.exponent).ok()?))
            }
        } else {
            let frac_len = (-self.exponent) as usize;
            if frac_len >= self.digits.len() {
                "0".to_string()
            } else {
                self.digits[..self.digits.len() - frac_len].to_string()
            }
        };
        let magnitude: i128 = int_digits.parse().ok()?;
        Some(if self.negative { -magnitude } else { magnitude })
    }
}
