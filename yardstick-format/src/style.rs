//! Formatting configuration
//!
//! `FormatSpec` is plain data: separators, affixes, style and an optional
//! fixed number of decimal places. It deserializes from partial JSON, every
//! missing field falling back to the non-Anglo default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yardstick_core::{Result, YardstickError, MAX_PLACES};

/// Marker used internally while swapping separators; never valid in user input
pub const RESERVED_PLACEHOLDER: &str = "\u{E000}";

/// Display style for a formatted number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Grouped digits with the configured separators
    #[default]
    #[serde(alias = "default")]
    Plain,
    Scientific,
    Percent,
    Binary,
    Hex,
    Roman,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Plain,
        Style::Scientific,
        Style::Percent,
        Style::Binary,
        Style::Hex,
        Style::Roman,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Plain => "plain",
            Style::Scientific => "scientific",
            Style::Percent => "percent",
            Style::Binary => "binary",
            Style::Hex => "hex",
            Style::Roman => "roman",
        }
    }

    /// Fractional digits used when the spec fixes none
    pub fn default_places(self) -> u32 {
        match self {
            Style::Scientific => 6,
            _ => 2,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Style {
    type Err = YardstickError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        if lower == "default" {
            return Ok(Style::Plain);
        }
        Style::ALL
            .into_iter()
            .find(|style| style.name() == lower)
            .ok_or_else(|| YardstickError::invalid_value(format!("unknown style '{}'", s)))
    }
}

/// Separator conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// `1,234.56`
    Anglo,
    /// `1.234,56`
    NonAnglo,
}

impl Locale {
    /// (thousands, decimal)
    pub fn separators(self) -> (&'static str, &'static str) {
        match self {
            Locale::Anglo => (",", "."),
            Locale::NonAnglo => (".", ","),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSpec {
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub prefix: String,
    pub suffix: String,
    pub style: Style,
    pub decimal_places: Option<u32>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self::locale(Locale::NonAnglo)
    }
}

impl FormatSpec {
    pub fn locale(locale: Locale) -> Self {
        let (thousands, decimal) = locale.separators();
        FormatSpec {
            thousands_separator: thousands.to_string(),
            decimal_separator: decimal.to_string(),
            prefix: String::new(),
            suffix: String::new(),
            style: Style::Plain,
            decimal_places: None,
        }
    }

    pub fn anglo() -> Self {
        Self::locale(Locale::Anglo)
    }

    pub fn non_anglo() -> Self {
        Self::locale(Locale::NonAnglo)
    }

    /// Load from a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: FormatSpec = serde_json::from_str(json)
            .map_err(|e| YardstickError::invalid_value(format!("format spec: {}", e)))?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    pub fn with_separators(mut self, thousands: &str, decimal: &str) -> Self {
        self.thousands_separator = thousands.to_string();
        self.decimal_separator = decimal.to_string();
        self
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    /// Decimal places in effect for the current style
    pub fn places(&self) -> u32 {
        self.decimal_places.unwrap_or_else(|| self.style.default_places())
    }

    pub fn validate(&self) -> Result<()> {
        if self.thousands_separator.is_empty() && self.decimal_separator.is_empty() {
            return Err(YardstickError::config_conflict(
                "thousands and decimal separators cannot both be empty",
            ));
        }
        for (name, sep) in [
            ("thousands", &self.thousands_separator),
            ("decimal", &self.decimal_separator),
        ] {
            if sep.contains(RESERVED_PLACEHOLDER) {
                return Err(YardstickError::config_conflict(format!(
                    "{} separator uses the reserved placeholder",
                    name
                )));
            }
        }
        if let Some(places) = self.decimal_places.filter(|p| *p > MAX_PLACES) {
            return Err(YardstickError::invalid_value(format!(
                "decimal_places {} exceeds the maximum of {}",
                places, MAX_PLACES
            )));
        }
        Ok(())
    }
}
