//! Conversion entry points
//!
//! A call resolves both units once into a `Conversion`, then applies it to
//! every element of the batch. Scaled quantities go source -> base -> target;
//! temperature goes through Celsius.

use tracing::debug;
use yardstick_core::{Batch, Result, UnitSide, YardstickError};

use crate::quantity::Quantity;
use crate::temperature::TemperatureScale;

/// A resolved unit pair, ready to apply to values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    /// Same unit on both sides: the value passes through untouched
    Identity,
    /// `value * from / to`, both factors into the quantity's base unit
    Scale { from: f64, to: f64 },
    Temperature { from: TemperatureScale, to: TemperatureScale },
}

impl Conversion {
    /// Look up both units; the source side is checked first
    pub fn resolve(quantity: Quantity, from: &str, to: &str) -> Result<Self> {
        if quantity.is_affine() {
            if from == to {
                return Ok(Conversion::Identity);
            }
            let from = TemperatureScale::resolve(from, UnitSide::Source)?;
            let to = TemperatureScale::resolve(to, UnitSide::Target)?;
            return Ok(Conversion::Temperature { from, to });
        }

        let from_factor = lookup(quantity, from, UnitSide::Source)?;
        let to_factor = lookup(quantity, to, UnitSide::Target)?;
        if from == to {
            return Ok(Conversion::Identity);
        }
        Ok(Conversion::Scale { from: from_factor, to: to_factor })
    }

    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Conversion::Identity => value,
            Conversion::Scale { from, to } => value * from / to,
            Conversion::Temperature { from, to } => from.convert(value, to),
        }
    }
}

fn lookup(quantity: Quantity, unit: &str, side: UnitSide) -> Result<f64> {
    quantity
        .factor(unit)
        .ok_or_else(|| YardstickError::unknown_unit(side, unit, quantity.name(), quantity.units()))
}

/// Stateless converter over the global unit tables
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitConverter;

impl UnitConverter {
    pub fn new() -> Self {
        UnitConverter
    }

    /// Convert one value or a sequence, answering in the same shape
    pub fn convert(
        &self,
        quantity: Quantity,
        input: impl Into<Batch<f64>>,
        from: &str,
        to: &str,
    ) -> Result<Batch<f64>> {
        let input = input.into();
        debug!(quantity = %quantity, from, to, count = input.len(), "converting");
        let conversion = Conversion::resolve(quantity, from, to)?;
        Ok(input.map(|v| conversion.apply(v)))
    }

    /// Convert a single value
    pub fn convert_value(
        &self,
        quantity: Quantity,
        value: f64,
        from: &str,
        to: &str,
    ) -> Result<f64> {
        debug!(quantity = %quantity, from, to, "converting value");
        Ok(Conversion::resolve(quantity, from, to)?.apply(value))
    }

    pub fn length(&self, input: impl Into<Batch<f64>>, from: &str, to: &str) -> Result<Batch<f64>> {
        self.convert(Quantity::Length, input, from, to)
    }

    pub fn mass(&self, input: impl Into<Batch<f64>>, from: &str, to: &str) -> Result<Batch<f64>> {
        self.convert(Quantity::Mass, input, from, to)
    }

    pub fn area(&self, input: impl Into<Batch<f64>>, from: &str, to: &str) -> Result<Batch<f64>> {
        self.convert(Quantity::Area, input, from, to)
    }

    pub fn volume(&self, input: impl Into<Batch<f64>>, from: &str, to: &str) -> Result<Batch<f64>> {
        self.convert(Quantity::Volume, input, from, to)
    }

    pub fn speed(&self, input: impl Into<Batch<f64>>, from: &str, to: &str) -> Result<Batch<f64>> {
        self.convert(Quantity::Speed, input, from, to)
    }

    pub fn energy(&self, input: impl Into<Batch<f64>>, from: &str, to: &str) -> Result<Batch<f64>> {
        self.convert(Quantity::Energy, input, from, to)
    }

    pub fn pressure(
        &self,
        input: impl Into<Batch<f64>>,
        from: &str,
        to: &str,
    ) -> Result<Batch<f64>> {
        self.convert(Quantity::Pressure, input, from, to)
    }

    pub fn power(&self, input: impl Into<Batch<f64>>, from: &str, to: &str) -> Result<Batch<f64>> {
        self.convert(Quantity::Power, input, from, to)
    }

    pub fn temperature(
        &self,
        input: impl Into<Batch<f64>>,
        from: &str,
        to: &str,
    ) -> Result<Batch<f64>> {
        self.convert(Quantity::Temperature, input, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yardstick_core::codes;

    fn scalar(b: Batch<f64>) -> f64 {
        b.into_scalar().unwrap()
    }

    #[test]
    fn test_known_values() {
        let c = UnitConverter::new();
        assert_eq!(scalar(c.temperature(0.0, "C", "F").unwrap()), 32.0);
        assert_eq!(scalar(c.temperature(100.0, "C", "K").unwrap()), 373.15);
        assert!((scalar(c.length(1.0, "inch", "cm").unwrap()) - 2.54).abs() < 1e-12);
        assert_eq!(scalar(c.volume(1.0, "l", "ml").unwrap()), 1000.0);
        assert_eq!(scalar(c.mass(1000.0, "g", "kg").unwrap()), 1.0);
    }

    #[test]
    fn test_integer_input() {
        let c = UnitConverter::new();
        assert_eq!(scalar(c.length(100i64, "cm", "m").unwrap()), 1.0);
    }

    #[test]
    fn test_unknown_source_named() {
        let err = UnitConverter::new().length(1.0, "bogus", "m").unwrap_err();
        assert_eq!(err.code(), codes::UNKNOWN_UNIT);
        assert_eq!(err.unit(), Some("bogus"));
        assert!(matches!(err, YardstickError::UnknownUnit { side: UnitSide::Source, .. }));
    }

    #[test]
    fn test_source_checked_before_target() {
        let err = UnitConverter::new().mass(1.0, "bogus", "nope").unwrap_err();
        assert_eq!(err.unit(), Some("bogus"));

        let err = UnitConverter::new().mass(1.0, "kg", "nope").unwrap_err();
        assert!(matches!(err, YardstickError::UnknownUnit { side: UnitSide::Target, .. }));
        assert_eq!(err.unit(), Some("nope"));
    }

    #[test]
    fn test_identity_still_validates_scaled_units() {
        assert!(UnitConverter::new().area(1.0, "bogus", "bogus").is_err());
    }

    #[test]
    fn test_temperature_identity_skips_validation() {
        let out = UnitConverter::new().temperature(12.5, "X", "X").unwrap();
        assert_eq!(out, Batch::Scalar(12.5));
    }

    #[test]
    fn test_sequence_shape() {
        let c = UnitConverter::new();
        let out = c.length(vec![100.0, 250.0, -50.0], "cm", "m").unwrap();
        assert_eq!(out, Batch::Sequence(vec![1.0, 2.5, -0.5]));

        let empty = c.length(Vec::<f64>::new(), "cm", "m").unwrap();
        assert_eq!(empty, Batch::Sequence(vec![]));
    }

    #[test]
    fn test_sequence_matches_scalar() {
        let c = UnitConverter::new();
        let input = [0.0, 1.0, -3.5, 1234.5678];
        let seq = c.pressure(input, "psi", "kPa").unwrap().into_vec();
        for (x, y) in input.iter().zip(seq) {
            assert_eq!(c.convert_value(Quantity::Pressure, *x, "psi", "kPa").unwrap(), y);
        }
    }

    #[test]
    fn test_corrected_tables() {
        let c = UnitConverter::new();
        assert_eq!(c.convert_value(Quantity::Volume, 1.0, "km3", "m3").unwrap(), 1e9);
        let speed = c.convert_value(Quantity::Speed, 36.0, "km/h", "m/s").unwrap();
        assert!((speed - 10.0).abs() < 1e-12);
        assert_eq!(c.convert_value(Quantity::Mass, 1.0, "t", "kg").unwrap(), 1000.0);
    }

    #[test]
    fn test_sub_milli_prefixes() {
        let c = UnitConverter::new();
        let close = |a: f64, b: f64| (a - b).abs() <= 1e-12 * b.abs();
        assert!(close(c.convert_value(Quantity::Length, 1.0, "nm", "angstrom").unwrap(), 10.0));
        assert!(close(c.convert_value(Quantity::Length, 1.0, "nm", "m").unwrap(), 1e-9));
        assert!(close(c.convert_value(Quantity::Length, 1.0, "um", "mm").unwrap(), 1e-3));
        assert!(close(c.convert_value(Quantity::Length, 1000.0, "pm", "nm").unwrap(), 1.0));
        assert!(close(c.convert_value(Quantity::Mass, 1.0, "ug", "mg").unwrap(), 1e-3));
        assert!(close(c.convert_value(Quantity::Mass, 1.0, "pg", "ng").unwrap(), 1e-3));
    }
}
