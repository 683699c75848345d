//! Number -> string
//!
//! Plain style groups digits with a neutral `,`/`.` convention first, then
//! swaps in the configured separators through a placeholder so that a
//! thousands separator of `.` never collides with the decimal mark.

use tracing::{trace, warn};
use yardstick_core::{Batch, Number, Result, Value, YardstickError};

use crate::roman::to_roman;
use crate::rounding::{fixed_digits, FixedDigits};
use crate::style::{FormatSpec, Style, RESERVED_PLACEHOLDER};

/// Format one value or a sequence, answering in the same shape.
/// Non-numeric elements fail with a type mismatch; the first failure aborts.
pub fn format(input: impl Into<Batch<Value>>, spec: &FormatSpec) -> Result<Batch<String>> {
    spec.validate()?;
    let input = input.into();
    trace!(style = %spec.style, count = input.len(), "formatting");
    input.try_map(|value| render(value.expect_number()?, spec))
}

/// Format a single dynamically typed value
pub fn format_value(value: &Value, spec: &FormatSpec) -> Result<String> {
    spec.validate()?;
    render(value.expect_number()?, spec)
}

/// Format a single number
pub fn format_number(n: &Number, spec: &FormatSpec) -> Result<String> {
    spec.validate()?;
    render(n, spec)
}

fn render(n: &Number, spec: &FormatSpec) -> Result<String> {
    let body = match spec.style {
        Style::Plain => render_plain(n, spec),
        Style::Scientific => render_scientific(n, spec),
        Style::Percent => render_percent(n, spec),
        Style::Binary => render_radix(whole_part(n, spec)?, "0b", |m| format!("{:b}", m)),
        Style::Hex => render_radix(whole_part(n, spec)?, "0x", |m| format!("{:x}", m)),
        Style::Roman => to_roman(whole_part(n, spec)?)?,
    };
    Ok(format!("{}{}{}", spec.prefix, body, spec.suffix))
}

/// Round to the requested places first (if any), then drop the fraction
fn whole_part(n: &Number, spec: &FormatSpec) -> Result<i128> {
    let (Some(places), Some(parts)) = (spec.decimal_places, n.decimal_parts()) else {
        return n.truncate();
    };
    parts
        .round_half_away(places)
        .truncate_i128()
        .ok_or(YardstickError::Overflow)
}

fn render_plain(n: &Number, spec: &FormatSpec) -> String {
    // integers keep no fractional part unless places were asked for
    if let (Number::Int(i), None) = (n, spec.decimal_places) {
        let grouped = group_thousands(&i.unsigned_abs().to_string(), &spec.thousands_separator);
        return if *i < 0 { format!("-{}", grouped) } else { grouped };
    }

    let neutral = match fixed_digits(n, spec.places()) {
        FixedDigits::Exact { negative, int_part, frac_part } => {
            join_fixed(negative, &group_thousands(&int_part, ","), &frac_part)
        }
        FixedDigits::Native(s) => s,
    };
    swap_separators(&neutral, &spec.thousands_separator, &spec.decimal_separator)
}

/// Neutral `,` -> placeholder, neutral `.` -> decimal, placeholder -> thousands
fn swap_separators(neutral: &str, thousands: &str, decimal: &str) -> String {
    neutral
        .replace(',', RESERVED_PLACEHOLDER)
        .replace('.', decimal)
        .replace(RESERVED_PLACEHOLDER, thousands)
}

fn render_scientific(n: &Number, spec: &FormatSpec) -> String {
    let places = spec.places();
    let Some(parts) = n.decimal_parts() else {
        warn!(value = %n, "no decimal view, using float formatting");
        return format!("{:.*e}", places as usize, n.to_f64());
    };
    let parts = match spec.decimal_places {
        Some(p) => parts.round_half_away(p),
        None => parts,
    };

    if parts.is_zero() {
        return format!("{}e+00", join_fixed(false, "0", &"0".repeat(places as usize)));
    }

    let mut exponent = parts.digits().len() as i64 - 1 + parts.exponent();
    let (mut negative, mut int_part, mut frac_part) = parts.shift(-exponent).split_fixed(places);
    if int_part.len() > 1 {
        // 9.99.. rounded up to 10.00
        exponent += 1;
        (negative, int_part, frac_part) = parts.shift(-exponent).split_fixed(places);
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}e{}{:02}",
        join_fixed(negative, &int_part, &frac_part),
        sign,
        exponent.unsigned_abs()
    )
}

fn render_percent(n: &Number, spec: &FormatSpec) -> String {
    let places = spec.places();
    let body = match n.decimal_parts() {
        Some(parts) => {
            let (negative, int_part, frac_part) = parts.shift(2).split_fixed(places);
            join_fixed(negative, &int_part, &frac_part)
        }
        None => {
            warn!(value = %n, "no decimal view, using float formatting");
            format!("{:.*}", places as usize, n.to_f64() * 100.0)
        }
    };
    format!("{}%", body)
}

fn render_radix(value: i128, marker: &str, digits: impl Fn(u128) -> String) -> String {
    let sign = if value < 0 { "-" } else { "" };
    format!("{}{}{}", sign, marker, digits(value.unsigned_abs()))
}

fn join_fixed(negative: bool, int_part: &str, frac_part: &str) -> String {
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

/// Insert `sep` every three digits from the right
fn group_thousands(digits: &str, sep: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * sep.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(sep);
        }
        out.push(ch);
    }
    out
}
