//! Yardstick Format - Locale-aware number formatting and parsing
//!
//! Styles:
//! - plain (grouped digits, configurable separators)
//! - scientific (`1.234568e+06`)
//! - percent (`12.35%`)
//! - binary / hex (`0b1010`, `-0xff`)
//! - roman (`MCMLXXXIV`)
//!
//! Rounding is half away from zero on exact decimal digits. `NumberWrapper`
//! keeps a value and its `FormatSpec` together behind chainable setters.

mod format;
mod parse;
mod roman;
mod rounding;
mod style;
mod wrapper;

pub use format::{format, format_number, format_value};
pub use parse::{parse, parse_str, parse_value, ParseAs};
pub use roman::{from_roman, to_roman, ROMAN_MAX};
pub use rounding::{round_to_places, MAX_PLACES};
pub use style::{FormatSpec, Locale, Style, RESERVED_PLACEHOLDER};
pub use wrapper::NumberWrapper;

#[cfg(test)]
mod tests {
    use super::*;
    use yardstick_core::{Batch, Number};

    #[test]
    fn test_plain_round_trip() {
        let specs = [
            FormatSpec::default(),
            FormatSpec::anglo(),
            FormatSpec::anglo().with_separators("'", "."),
        ];
        for spec in specs {
            for x in [0.0, 1.25, -1234567.5, 98765.43] {
                let text = format_number(&Number::Float(x), &spec).unwrap();
                let back = parse_str(&text, &spec, None).unwrap();
                assert_eq!(back, Number::Float(x), "{} via {:?}", x, text);
            }
        }
    }

    #[test]
    fn test_integer_styles_round_trip() {
        for style in [Style::Plain, Style::Binary, Style::Hex, Style::Roman] {
            let spec = FormatSpec::anglo().with_style(style).with_prefix("[").with_suffix("]");
            for n in [1i64, 7, 42, 1984, 3999] {
                let text = format_number(&Number::Int(n), &spec).unwrap();
                let back = parse_str(&text, &spec, Some(ParseAs::Int)).unwrap();
                assert_eq!(back, Number::Int(n), "{} via {}", style, text);
            }
        }
    }

    #[test]
    fn test_batch_round_trip() {
        let spec = FormatSpec::default();
        let text = format(vec![1.5_f64, 2.25], &spec).unwrap();
        let back = parse(text.into_vec(), &spec, None).unwrap();
        assert_eq!(back, Batch::Sequence(vec![Number::Float(1.5), Number::Float(2.25)]));
    }
}
