//! Whole-second UTC timestamps

use std::fmt::{self, Write};
use std::ops::{Add, Sub};
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat,
    TimeZone, Utc, Weekday,
};
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use yardstick_core::{Result, YardstickError};

use crate::zone::{resolve_zone, DEFAULT_ZONE};

#[derive(Debug, Clone, Copy)]
enum Layout {
    DateTime,
    Date,
}

/// Accepted string layouts, tried in order; the first exact match wins
const PATTERNS: [(&str, Layout); 11] = [
    ("%Y-%m-%d %H:%M:%S", Layout::DateTime),
    ("%Y-%m-%d %H:%M:%S%.f", Layout::DateTime),
    ("%Y-%m-%dT%H:%M:%S", Layout::DateTime),
    ("%Y-%m-%dT%H:%M:%S%.f", Layout::DateTime),
    ("%Y-%m-%dT%H:%M:%SZ", Layout::DateTime),
    ("%Y-%m-%dT%H:%M:%S%.fZ", Layout::DateTime),
    ("%Y-%m-%d", Layout::Date),
    ("%m/%d/%Y", Layout::Date),
    ("%m/%d/%Y %H:%M:%S", Layout::DateTime),
    ("%d/%m/%Y", Layout::Date),
    ("%d/%m/%Y %H:%M:%S", Layout::DateTime),
];

/// Seconds since the Unix epoch, UTC.
///
/// Every constructor truncates toward zero to whole seconds. Values are
/// immutable: the `add_*` methods and operators return new timestamps and
/// saturate at the `i64` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    // ========== Construction ==========

    /// Create from seconds since the Unix epoch
    pub fn from_epoch(secs: i64) -> Self {
        Timestamp(secs)
    }

    /// Create from fractional epoch seconds, truncated toward zero
    pub fn from_f64(secs: f64) -> Result<Self> {
        if !secs.is_finite() {
            return Err(YardstickError::invalid_value(format!(
                "{} is not a valid epoch time",
                secs
            )));
        }
        let t = secs.trunc();
        if t < i64::MIN as f64 || t >= i64::MAX as f64 {
            return Err(YardstickError::Overflow);
        }
        Ok(Timestamp(t as i64))
    }

    /// Create from a zoned datetime, normalized to UTC
    pub fn from_datetime<Z: TimeZone>(dt: &DateTime<Z>) -> Self {
        let secs = dt.timestamp();
        // timestamp() floors; sub-second parts before 1970 truncate toward zero
        if secs < 0 && dt.timestamp_subsec_nanos() > 0 {
            Timestamp(secs + 1)
        } else {
            Timestamp(secs)
        }
    }

    /// Create from a wall-clock datetime read as UTC
    pub fn from_naive(naive: NaiveDateTime) -> Self {
        Self::from_datetime(&naive.and_utc())
    }

    /// Midnight UTC of `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_naive(date.and_time(NaiveTime::MIN))
    }

    /// Parse a date string against the known layouts, then RFC 3339.
    ///
    /// A trailing parenthesized note such as `"2023-01-01 (New Year)"` is
    /// ignored. Strings without an offset are read as UTC.
    pub fn parse(text: &str) -> Result<Self> {
        let cleaned = strip_annotation(text.trim());
        for (pattern, layout) in PATTERNS {
            if let Some(naive) = match_layout(cleaned, pattern, layout) {
                debug!(input = text, pattern, "date pattern matched");
                return Ok(Self::from_naive(naive));
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
            debug!(input = text, "parsed as RFC 3339");
            return Ok(Self::from_datetime(&dt));
        }
        debug!(input = text, tried = PATTERNS.len() + 1, "no date pattern matched");
        Err(YardstickError::DateParse(text.to_string()))
    }

    /// Parse with an explicit strftime pattern, reading the wall-clock
    /// time in `zone`. Ambiguous local times take the earlier instant;
    /// times skipped by a transition fail.
    pub fn parse_with_format(text: &str, pattern: &str, zone: &str) -> Result<Self> {
        let tz = resolve_zone(zone)?;
        let naive = match_layout(text.trim(), pattern, Layout::DateTime)
            .or_else(|| match_layout(text.trim(), pattern, Layout::Date))
            .ok_or_else(|| YardstickError::DateParse(text.to_string()))?;
        let local = tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| YardstickError::DateParse(text.to_string()))?;
        Ok(Self::from_datetime(&local))
    }

    /// Current time
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Today's date in `zone`, stored as midnight UTC of that date
    pub fn today(zone: &str) -> Result<Self> {
        let tz = resolve_zone(zone)?;
        Ok(Self::from_date(Utc::now().with_timezone(&tz).date_naive()))
    }

    // ========== Accessors ==========

    pub fn epoch_seconds(&self) -> i64 {
        self.0
    }

    pub fn to_utc(&self) -> Result<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0).ok_or_else(|| {
            YardstickError::invalid_value(format!(
                "timestamp {} is outside the calendar range",
                self.0
            ))
        })
    }

    /// The same instant in `zone`
    pub fn to_datetime(&self, zone: &str) -> Result<DateTime<Tz>> {
        let tz = resolve_zone(zone)?;
        Ok(self.to_utc()?.with_timezone(&tz))
    }

    /// Render with a strftime pattern in `zone`
    pub fn format(&self, pattern: &str, zone: &str) -> Result<String> {
        let dt = self.to_datetime(zone)?;
        let mut out = String::new();
        write!(out, "{}", dt.format(pattern)).map_err(|_| {
            YardstickError::invalid_value(format!("invalid format pattern '{}'", pattern))
        })?;
        Ok(out)
    }

    /// `YYYY-MM-DDTHH:MM:SS+HH:MM`
    pub fn to_iso(&self, zone: &str) -> Result<String> {
        Ok(self.to_datetime(zone)?.to_rfc3339_opts(SecondsFormat::Secs, false))
    }

    // ========== Arithmetic ==========

    pub fn add_seconds(&self, secs: i64) -> Self {
        Timestamp(self.0.saturating_add(secs))
    }

    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.add_seconds(minutes.saturating_mul(60))
    }

    pub fn add_hours(&self, hours: i64) -> Self {
        self.add_seconds(hours.saturating_mul(3600))
    }

    pub fn add_days(&self, days: i64) -> Self {
        self.add_seconds(days.saturating_mul(86_400))
    }

    /// Signed seconds from `other` to `self`; positive when `self` is later
    pub fn difference(&self, other: &Timestamp) -> i64 {
        self.0.saturating_sub(other.0)
    }

    // ========== Calendar ==========

    /// Saturday or Sunday in `zone`
    pub fn is_weekend(&self, zone: &str) -> Result<bool> {
        let dt = self.to_datetime(zone)?;
        Ok(matches!(dt.weekday(), Weekday::Sat | Weekday::Sun))
    }

    /// 00:00:00 of this instant's date in `zone`
    pub fn start_of_day(&self, zone: &str) -> Result<Self> {
        self.at_wall_time(zone, 0, 0, 0)
    }

    /// 23:59:59 of this instant's date in `zone`
    pub fn end_of_day(&self, zone: &str) -> Result<Self> {
        self.at_wall_time(zone, 23, 59, 59)
    }

    fn at_wall_time(&self, zone: &str, hour: u32, min: u32, sec: u32) -> Result<Self> {
        let dt = self.to_datetime(zone)?;
        let wall = dt.date_naive().and_hms_opt(hour, min, sec).ok_or_else(|| {
            YardstickError::invalid_value(format!("{:02}:{:02}:{:02}", hour, min, sec))
        })?;
        match dt.timezone().from_local_datetime(&wall).earliest() {
            Some(local) => Ok(Self::from_datetime(&local)),
            None => {
                // wall time skipped by a transition: keep this instant's offset
                let offset = i64::from(dt.offset().fix().local_minus_utc());
                Ok(Timestamp(Self::from_naive(wall).0.saturating_sub(offset)))
            }
        }
    }
}

fn match_layout(text: &str, pattern: &str, layout: Layout) -> Option<NaiveDateTime> {
    match layout {
        Layout::DateTime => NaiveDateTime::parse_from_str(text, pattern).ok(),
        Layout::Date => NaiveDate::parse_from_str(text, pattern)
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN)),
    }
}

fn strip_annotation(text: &str) -> &str {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s*\([^)]*\)$").expect("annotation pattern compiles"));
    match re.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format("%Y-%m-%d %H:%M:%S", DEFAULT_ZONE) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "@{}", self.0),
        }
    }
}

impl FromStr for Timestamp {
    type Err = YardstickError;

    fn from_str(s: &str) -> Result<Self> {
        Timestamp::parse(s)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp(secs)
    }
}

impl<Z: TimeZone> From<DateTime<Z>> for Timestamp {
    fn from(dt: DateTime<Z>) -> Self {
        Timestamp::from_datetime(&dt)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Timestamp::from_date(date)
    }
}

// ========== Operators ==========

impl Add<i64> for Timestamp {
    type Output = Timestamp;

    fn add(self, secs: i64) -> Timestamp {
        self.add_seconds(secs)
    }
}

impl Sub<i64> for Timestamp {
    type Output = Timestamp;

    fn sub(self, secs: i64) -> Timestamp {
        Timestamp(self.0.saturating_sub(secs))
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, d: Duration) -> Timestamp {
        self.add_seconds(d.num_seconds())
    }
}

impl Sub<Duration> for Timestamp {
    type Output = Timestamp;

    fn sub(self, d: Duration) -> Timestamp {
        self - d.num_seconds()
    }
}

/// Seconds between two timestamps
impl Sub for Timestamp {
    type Output = i64;

    fn sub(self, other: Timestamp) -> i64 {
        self.difference(&other)
    }
}
