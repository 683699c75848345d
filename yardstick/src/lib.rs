//! Yardstick - Unit conversion, number formatting and timestamps
//!
//! Re-exports the three independent leaf crates:
//! - `units`: table-driven conversion across nine physical quantities
//! - `format`: locale-aware number rendering and parsing, plus `NumberWrapper`
//! - `time`: whole-second UTC timestamps with zone-aware rendering
//!
//! ```
//! use yardstick::prelude::*;
//!
//! let cm = UnitConverter::new().length(1.0, "inch", "cm").unwrap();
//! assert_eq!(cm.into_scalar(), Some(2.54));
//!
//! let text = format(1234.5, &FormatSpec::anglo()).unwrap();
//! assert_eq!(text.into_scalar().as_deref(), Some("1,234.50"));
//! ```

pub use yardstick_format as format;
pub use yardstick_time as time;
pub use yardstick_units as units;

pub use yardstick_core::{Batch, Number, NumberKind, Result, Value, YardstickError};

pub mod prelude {
    pub use yardstick_core::prelude::*;
    pub use yardstick_format::{format, parse, FormatSpec, Locale, NumberWrapper, ParseAs, Style};
    pub use yardstick_time::Timestamp;
    pub use yardstick_units::{Quantity, UnitConverter};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use yardstick_format::{format_number, parse_str};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn convert(q: Quantity, x: f64, from: &str, to: &str) -> f64 {
        UnitConverter::new().convert_value(q, x, from, to).unwrap()
    }

    mod units {
        use super::*;

        const SAMPLES: [f64; 5] = [0.0, 1.0, -3.5, 42.125, 1.0e6];

        #[test]
        fn test_every_pair_round_trips() {
            init_tracing();
            for q in Quantity::ALL {
                for from in q.units() {
                    for to in q.units() {
                        for x in SAMPLES {
                            let back = convert(q, convert(q, x, from, to), to, from);
                            assert!(
                                approx_eq(back, x),
                                "{} {} -> {} -> {}: {} vs {}",
                                q,
                                x,
                                from,
                                to,
                                back,
                                x
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn test_identity_is_exact() {
            for q in Quantity::ALL {
                for unit in q.units() {
                    for x in SAMPLES {
                        assert_eq!(convert(q, x, unit, unit), x, "{} {}", q, unit);
                    }
                }
            }
        }

        #[test]
        fn test_known_values() {
            assert_eq!(convert(Quantity::Temperature, 0.0, "C", "F"), 32.0);
            assert!(approx_eq(convert(Quantity::Temperature, 100.0, "C", "K"), 373.15));
            assert!(approx_eq(convert(Quantity::Length, 1.0, "inch", "cm"), 2.54));
            assert_eq!(convert(Quantity::Volume, 1.0, "l", "ml"), 1000.0);
            assert_eq!(convert(Quantity::Mass, 1000.0, "g", "kg"), 1.0);
        }

        #[test]
        fn test_sequence_matches_scalar() {
            let conv = UnitConverter::new();
            let xs = vec![0.0, 12.0, -7.25];
            let out = conv.pressure(xs.clone(), "bar", "psi").unwrap().into_vec();
            assert_eq!(out.len(), xs.len());
            for (x, y) in xs.iter().zip(&out) {
                assert_eq!(*y, convert(Quantity::Pressure, *x, "bar", "psi"));
            }
            let empty = conv.energy(Vec::<f64>::new(), "J", "kWh").unwrap();
            assert_eq!(empty, Batch::Sequence(vec![]));
        }

        #[test]
        fn test_bogus_unit_named() {
            let err = UnitConverter::new().length(1.0, "bogus", "m").unwrap_err();
            assert_eq!(err.code(), codes::UNKNOWN_UNIT);
            assert_eq!(err.unit(), Some("bogus"));
        }
    }

    mod formatting {
        use super::*;

        fn round_trip(n: Number, spec: &FormatSpec) -> Number {
            let text = format_number(&n, spec).unwrap();
            parse_str(&text, spec, None).unwrap()
        }

        #[test]
        fn test_integer_styles_round_trip() {
            init_tracing();
            for style in [Style::Binary, Style::Hex, Style::Roman] {
                let spec = FormatSpec::default()
                    .with_style(style)
                    .with_prefix("[")
                    .with_suffix("]");
                for i in [1i64, 7, 255, 1984, 3999] {
                    let back = round_trip(Number::Int(i), &spec);
                    assert_eq!(back, Number::Int(i), "{} {}", style, i);
                }
            }
        }

        #[test]
        fn test_plain_round_trip() {
            let specs = [
                FormatSpec::default(),
                FormatSpec::anglo(),
                FormatSpec::anglo().with_separators("'", "."),
            ];
            for spec in specs {
                for x in [0.5, 1234.25, -98765.75, 1.0e7] {
                    match round_trip(Number::Float(x), &spec) {
                        Number::Float(y) => assert!(approx_eq(x, y), "{} vs {}", x, y),
                        other => panic!("expected a float, got {:?}", other),
                    }
                }
            }
        }

        #[test]
        fn test_rounding_boundary() {
            let out = format(2.675, &FormatSpec::anglo().with_places(2)).unwrap();
            assert_eq!(out.into_scalar().as_deref(), Some("2.68"));
        }

        #[test]
        fn test_error_cases() {
            let err = format("abc", &FormatSpec::default()).unwrap_err();
            assert_eq!(err.code(), codes::TYPE_ERROR);
            let mut nw = NumberWrapper::new(1.0);
            let err = nw.set_separators(Some(""), Some("")).unwrap_err();
            assert_eq!(err.code(), codes::CONFIG_CONFLICT);
        }
    }

    mod timestamps {
        use super::*;

        #[test]
        fn test_add_hours() {
            let t = Timestamp::from_epoch(1_672_574_400).add_hours(1);
            assert_eq!(t.epoch_seconds(), 1_672_578_000);
        }

        #[test]
        fn test_new_year_is_weekend() {
            let t: Timestamp = "2023-01-01".parse().unwrap();
            assert!(t.is_weekend("UTC").unwrap());
        }

        #[test]
        fn test_difference_antisymmetric() {
            let pairs = [(0, 1), (1_672_574_400, 1_600_000_000), (-86_400, 86_400)];
            for (a, b) in pairs {
                let (a, b) = (Timestamp::from_epoch(a), Timestamp::from_epoch(b));
                assert_eq!(a.difference(&b), -b.difference(&a));
            }
        }
    }
}
