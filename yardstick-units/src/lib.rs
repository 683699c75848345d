//! Yardstick Units - Table-driven unit conversion
//!
//! Every scaled quantity pivots through one base unit:
//! - Length (base cm: pm..km, inch, foot, mile, parsec, etc.)
//! - Mass (base g: pg..kg, t, ounce, pound, stone, etc.)
//! - Area (base m2: mm2..km2, sqft, acre, hectare, etc.)
//! - Volume (base l: mm3..km3, ml..kl, gallon_us, pint, etc.)
//! - Speed (base m/s: km/h, mph, knot, mach, etc.)
//! - Energy (base J: kJ..TJ, cal, kWh, BTU, etc.)
//! - Pressure (base Pa: hPa..GPa, bar, atm, psi, etc.)
//! - Power (base W: kW..TW, hp, metric_hp, BTU_per_hour)
//!
//! Temperature (C, F, K, R) is affine and converts through Celsius.

mod convert;
mod quantity;
mod temperature;

pub use convert::{Conversion, UnitConverter};
pub use quantity::{Quantity, UnitRegistry, UnitTable, UNITS};
pub use temperature::TemperatureScale;
