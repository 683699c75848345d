//! Fluent wrapper holding one number and its formatting defaults

use std::fmt;

use yardstick_core::{Number, Result, Value};

use crate::format::format_number;
use crate::parse::{parse_str, ParseAs};
use crate::rounding::round_to_places;
use crate::style::{FormatSpec, Locale, Style};

/// A number plus the `FormatSpec` used to render it.
///
/// Setters mutate in place and return `&mut Self` so calls chain:
///
/// ```
/// use yardstick_format::NumberWrapper;
///
/// let mut price = NumberWrapper::new(1234567.891);
/// price.anglo().set_prefix("$");
/// assert_eq!(price.plain().unwrap(), "$1,234,567.89");
/// assert_eq!(price.raw_plain().unwrap(), "1,234,567.89");
/// ```
///
/// Rendering never changes the stored state.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberWrapper {
    value: Number,
    spec: FormatSpec,
}

impl NumberWrapper {
    pub fn new(value: impl Into<Number>) -> Self {
        Self::with_spec(value, FormatSpec::default())
    }

    pub fn with_spec(value: impl Into<Number>, spec: FormatSpec) -> Self {
        NumberWrapper { value: value.into(), spec }
    }

    /// Parse a formatted string into a wrapper that keeps `spec` for rendering
    pub fn parse(text: &str, spec: FormatSpec, parse_as: Option<ParseAs>) -> Result<Self> {
        let value = parse_str(text, &spec, parse_as)?;
        Ok(NumberWrapper { value, spec })
    }

    pub fn value(&self) -> &Number {
        &self.value
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    // ========== Configuration ==========

    pub fn set_locale(&mut self, locale: Locale) -> &mut Self {
        let (thousands, decimal) = locale.separators();
        self.spec.thousands_separator = thousands.to_string();
        self.spec.decimal_separator = decimal.to_string();
        self
    }

    /// `1,234.56`
    pub fn anglo(&mut self) -> &mut Self {
        self.set_locale(Locale::Anglo)
    }

    /// `1.234,56`
    pub fn non_anglo(&mut self) -> &mut Self {
        self.set_locale(Locale::NonAnglo)
    }

    pub fn set_prefix(&mut self, prefix: &str) -> &mut Self {
        self.spec.prefix = prefix.to_string();
        self
    }

    pub fn set_suffix(&mut self, suffix: &str) -> &mut Self {
        self.spec.suffix = suffix.to_string();
        self
    }

    pub fn set_decimal_places(&mut self, places: u32) -> &mut Self {
        self.spec.decimal_places = Some(places);
        self
    }

    pub fn clear_decimal_places(&mut self) -> &mut Self {
        self.spec.decimal_places = None;
        self
    }

    /// Replace either separator; `None` keeps the current one.
    /// Nothing changes if the resulting pair is invalid.
    pub fn set_separators(
        &mut self,
        thousands: Option<&str>,
        decimal: Option<&str>,
    ) -> Result<&mut Self> {
        let mut next = self.spec.clone();
        if let Some(t) = thousands {
            next.thousands_separator = t.to_string();
        }
        if let Some(d) = decimal {
            next.decimal_separator = d.to_string();
        }
        next.validate()?;
        self.spec = next;
        Ok(self)
    }

    /// Round the stored value itself, half away from zero
    pub fn precise(&mut self, places: u32, force_float: bool) -> Result<&mut Self> {
        self.value = round_to_places(&Value::Number(self.value.clone()), places, force_float)?;
        Ok(self)
    }

    // ========== Rendering ==========

    pub fn format(&self, style: Style) -> Result<String> {
        self.render(style, false)
    }

    fn render(&self, style: Style, raw: bool) -> Result<String> {
        let mut spec = FormatSpec { style, ..self.spec.clone() };
        if raw {
            spec.prefix.clear();
            spec.suffix.clear();
        }
        format_number(&self.value, &spec)
    }

    pub fn plain(&self) -> Result<String> {
        self.render(Style::Plain, false)
    }

    pub fn scientific(&self) -> Result<String> {
        self.render(Style::Scientific, false)
    }

    pub fn percent(&self) -> Result<String> {
        self.render(Style::Percent, false)
    }

    pub fn binary(&self) -> Result<String> {
        self.render(Style::Binary, false)
    }

    pub fn hex(&self) -> Result<String> {
        self.render(Style::Hex, false)
    }

    pub fn roman(&self) -> Result<String> {
        self.render(Style::Roman, false)
    }

    // Same styles without prefix or suffix

    pub fn raw_plain(&self) -> Result<String> {
        self.render(Style::Plain, true)
    }

    pub fn raw_scientific(&self) -> Result<String> {
        self.render(Style::Scientific, true)
    }

    pub fn raw_percent(&self) -> Result<String> {
        self.render(Style::Percent, true)
    }

    pub fn raw_binary(&self) -> Result<String> {
        self.render(Style::Binary, true)
    }

    pub fn raw_hex(&self) -> Result<String> {
        self.render(Style::Hex, true)
    }

    pub fn raw_roman(&self) -> Result<String> {
        self.render(Style::Roman, true)
    }
}

impl fmt::Display for NumberWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.plain() {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "{}", self.value),
        }
    }
}
