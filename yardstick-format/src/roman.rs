//! Roman numerals (greedy subtractive notation)

use yardstick_core::{Result, YardstickError};

/// Largest value encoded; beyond 3999 the numeral is a run of `M`s
pub const ROMAN_MAX: i128 = 1_000_000;

const NUMERALS: [(i128, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

pub fn to_roman(n: i128) -> Result<String> {
    if n <= 0 {
        return Err(YardstickError::invalid_value(format!(
            "roman numerals need a positive integer, got {}",
            n
        )));
    }
    if n > ROMAN_MAX {
        return Err(YardstickError::invalid_value(format!(
            "{} is too large for roman numerals (max {})",
            n, ROMAN_MAX
        )));
    }

    let mut remaining = n;
    let mut out = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(out)
}

fn symbol_value(symbol: &str) -> Option<i128> {
    NUMERALS.iter().find(|(_, s)| *s == symbol).map(|(v, _)| *v)
}

/// Decode with two-character lookahead: a known pair such as `CM` is
/// consumed whole, anything else one character at a time
pub fn from_roman(s: &str) -> Result<i128> {
    if s.is_empty() {
        return Err(YardstickError::invalid_value("empty roman numeral"));
    }
    if let Some(bad) = s.chars().find(|c| !"IVXLCDM".contains(*c)) {
        return Err(YardstickError::invalid_value(format!(
            "invalid roman numeral '{}': unexpected '{}'",
            s, bad
        )));
    }

    // ASCII only past this point
    let mut total: i128 = 0;
    let mut i = 0;
    while i < s.len() {
        if let Some(pair) = s.get(i..i + 2).and_then(symbol_value) {
            total += pair;
            i += 2;
        } else {
            total += symbol_value(&s[i..i + 1]).unwrap_or(0);
            i += 1;
        }
    }
    Ok(total)
}
