//! Unit tables, one per physical quantity
//!
//! Each scaled quantity pivots through a base unit: a metric family whose
//! factors are powers of ten (or a hand-written table for irregular
//! families) plus a map of non-metric units, all expressed as "how many
//! base units is one of these". Temperature is affine and lives in
//! `temperature.rs`; its table here only lists the scale symbols.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use yardstick_core::{Result, YardstickError};

use crate::temperature::TemperatureScale;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Physical quantities with a conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    #[serde(alias = "longitude")]
    Length,
    Mass,
    Area,
    Volume,
    Speed,
    Energy,
    Pressure,
    Power,
    Temperature,
}

impl Quantity {
    pub const ALL: [Quantity; 9] = [
        Quantity::Length,
        Quantity::Mass,
        Quantity::Area,
        Quantity::Volume,
        Quantity::Speed,
        Quantity::Energy,
        Quantity::Pressure,
        Quantity::Power,
        Quantity::Temperature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Mass => "mass",
            Quantity::Area => "area",
            Quantity::Volume => "volume",
            Quantity::Speed => "speed",
            Quantity::Energy => "energy",
            Quantity::Pressure => "pressure",
            Quantity::Power => "power",
            Quantity::Temperature => "temperature",
        }
    }

    /// Pivot unit; Celsius for temperature
    pub fn base_unit(self) -> &'static str {
        UNITS.table(self).base_unit
    }

    /// Every accepted unit, metric first, in table order
    pub fn units(self) -> &'static [&'static str] {
        &UNITS.table(self).units
    }

    pub fn contains(self, unit: &str) -> bool {
        UNITS.table(self).factors.contains_key(unit)
    }

    /// Factor turning one `unit` into base units (always 1 for temperature scales)
    pub fn factor(self, unit: &str) -> Option<f64> {
        UNITS.table(self).factor(unit)
    }

    pub fn is_affine(self) -> bool {
        self == Quantity::Temperature
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Quantity {
    type Err = YardstickError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "longitude" {
            return Ok(Quantity::Length);
        }
        Quantity::ALL
            .into_iter()
            .find(|q| q.name() == lower)
            .ok_or_else(|| YardstickError::invalid_value(format!("unknown quantity '{}'", s)))
    }
}

/// Units of one quantity with their factors into the base unit
#[derive(Debug, Clone)]
pub struct UnitTable {
    pub quantity: Quantity,
    pub base_unit: &'static str,
    units: Vec<&'static str>,
    factors: HashMap<&'static str, f64>,
}

impl UnitTable {
    fn new(
        quantity: Quantity,
        base_unit: &'static str,
        metric: Vec<(&'static str, f64)>,
        foreign: &[(&'static str, f64)],
    ) -> Self {
        let entries: Vec<(&'static str, f64)> =
            metric.into_iter().chain(foreign.iter().copied()).collect();
        UnitTable {
            quantity,
            base_unit,
            units: entries.iter().map(|(u, _)| *u).collect(),
            factors: entries.into_iter().collect(),
        }
    }

    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors.get(unit).copied()
    }

    pub fn units(&self) -> &[&'static str] {
        &self.units
    }
}

/// Registry of all quantity tables
pub struct UnitRegistry {
    tables: HashMap<Quantity, UnitTable>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry { tables: HashMap::new() };
        registry.register_all();
        registry
    }

    pub fn table(&self, quantity: Quantity) -> &UnitTable {
        // register_all covers every variant of Quantity::ALL
        &self.tables[&quantity]
    }

    fn register(&mut self, table: UnitTable) {
        self.tables.insert(table.quantity, table);
    }

    fn register_all(&mut self) {
        self.register_length();
        self.register_mass();
        self.register_area();
        self.register_volume();
        self.register_speed();
        self.register_energy();
        self.register_pressure();
        self.register_power();
        self.register_temperature();
    }

    fn register_length(&mut self) {
        // sub-milli prefixes step by 1000, not 10
        let mut metric = vec![("pm", 1e-10), ("nm", 1e-7), ("um", 1e-4)];
        metric.extend(prefixed(&["mm", "cm", "dm", "m", "dam", "hm", "km"], 1, 10));
        self.register(UnitTable::new(
            Quantity::Length,
            "cm",
            metric,
            &[
                ("inch", 2.54),
                ("foot", 30.48),
                ("yard", 91.44),
                ("mile", 160934.4),
                ("nautical_mile", 185200.0),
                ("angstrom", 1e-8),
                ("mil", 0.00254),
                ("furlong", 20116.8),
                ("fathom", 182.88),
                ("light_year", 9.461e17),
                ("parsec", 3.086e18),
                ("astronomical_unit", 1.496e13),
            ],
        ));
    }

    fn register_mass(&mut self) {
        let mut metric = vec![("pg", 1e-12), ("ng", 1e-9), ("ug", 1e-6)];
        metric.extend(prefixed(&["mg", "cg", "dg", "g", "dag", "hg", "kg"], 3, 10));
        // metric ton
        metric.push(("t", 1e6));
        self.register(UnitTable::new(
            Quantity::Mass,
            "g",
            metric,
            &[
                ("ounce", 28.3495),
                ("pound", 453.592),
                ("stone", 6350.29),
                ("ton_us", 907185.0),
                ("ton_uk", 1016046.9),
                ("grain", 0.0647989),
                ("dram", 1.77185),
                ("troy_ounce", 31.1035),
                ("carat", 0.2),
                ("slug", 14593.9),
            ],
        ));
    }

    fn register_area(&mut self) {
        self.register(UnitTable::new(
            Quantity::Area,
            "m2",
            prefixed(&["mm2", "cm2", "dm2", "m2", "dam2", "hm2", "km2"], 3, 100),
            &[
                ("sqin", 0.00064516),
                ("sqft", 0.092903),
                ("sqyd", 0.836127),
                ("acre", 4046.86),
                ("hectare", 10000.0),
                ("sqmile", 2.59e6),
                ("barn", 1e-28),
                ("are", 100.0),
                ("rood", 1011.71),
            ],
        ));
    }

    fn register_volume(&mut self) {
        self.register(UnitTable::new(
            Quantity::Volume,
            "l",
            vec![
                ("mm3", 1e-6),
                ("cm3", 1e-3),
                ("dm3", 1.0),
                ("m3", 1e3),
                ("dam3", 1e6),
                ("hm3", 1e9),
                ("km3", 1e12),
                ("l", 1.0),
                ("ml", 1e-3),
                ("cl", 1e-2),
                ("dl", 1e-1),
                ("dal", 10.0),
                ("hl", 100.0),
                ("kl", 1000.0),
            ],
            &[
                ("gallon_us", 3.78541),
                ("gallon_uk", 4.54609),
                ("quart", 0.946353),
                ("pint", 0.473176),
                ("cup", 0.24),
                ("fluid_ounce", 0.0295735),
                ("cubic_inch", 0.0163871),
                ("tablespoon", 0.0147868),
                ("teaspoon", 0.00492892),
                ("barrel_oil", 158.987),
                ("bushel", 35.2391),
            ],
        ));
    }

    fn register_speed(&mut self) {
        self.register(UnitTable::new(
            Quantity::Speed,
            "m/s",
            vec![("mm/s", 0.001), ("cm/s", 0.01), ("m/s", 1.0), ("km/h", 1.0 / 3.6)],
            &[("mph", 0.44704), ("knot", 0.514444), ("fps", 0.3048), ("mach", 343.0)],
        ));
    }

    fn register_energy(&mut self) {
        self.register(UnitTable::new(
            Quantity::Energy,
            "J",
            vec![("J", 1.0), ("kJ", 1e3), ("MJ", 1e6), ("GJ", 1e9), ("TJ", 1e12)],
            &[
                ("cal", 4.184),
                ("kcal", 4184.0),
                ("Wh", 3600.0),
                ("kWh", 3.6e6),
                ("BTU", 1055.06),
                ("erg", 1e-7),
                ("foot_pound", 1.35582),
                ("electron_volt", 1.602e-19),
            ],
        ));
    }

    fn register_pressure(&mut self) {
        self.register(UnitTable::new(
            Quantity::Pressure,
            "Pa",
            vec![
                ("Pa", 1.0),
                ("hPa", 100.0),
                ("kPa", 1e3),
                ("MPa", 1e6),
                ("GPa", 1e9),
                ("bar", 1e5),
                ("mbar", 100.0),
            ],
            &[
                ("atm", 101325.0),
                ("psi", 6894.76),
                ("mmHg", 133.322),
                ("torr", 133.322),
                ("inHg", 3386.39),
            ],
        ));
    }

    fn register_power(&mut self) {
        self.register(UnitTable::new(
            Quantity::Power,
            "W",
            vec![("W", 1.0), ("kW", 1e3), ("MW", 1e6), ("GW", 1e9), ("TW", 1e12)],
            &[("hp", 745.7), ("metric_hp", 735.499), ("BTU_per_hour", 0.293071)],
        ));
    }

    fn register_temperature(&mut self) {
        let scales = TemperatureScale::ALL.iter().map(|s| (s.symbol(), 1.0)).collect();
        self.register(UnitTable::new(
            Quantity::Temperature,
            TemperatureScale::Celsius.symbol(),
            scales,
            &[],
        ));
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Factors for a metric family where each step multiplies by `radix`
fn prefixed(units: &[&'static str], base_index: usize, radix: u64) -> Vec<(&'static str, f64)> {
    units
        .iter()
        .enumerate()
        .map(|(i, u)| (*u, power_factor(radix, i as i32 - base_index as i32)))
        .collect()
}

/// `radix^exp`, with negative powers computed as one correctly rounded division
fn power_factor(radix: u64, exp: i32) -> f64 {
    let magnitude = radix.pow(exp.unsigned_abs()) as f64;
    if exp >= 0 {
        magnitude
    } else {
        1.0 / magnitude
    }
}
