//! Yardstick Time - Whole-second UTC timestamps
//!
//! `Timestamp` wraps one `i64` of seconds since the Unix epoch. Strings are
//! parsed against a fixed, ordered list of layouts (ISO 8601 variants,
//! date-only, US then EU slash dates) with RFC 3339 as the last resort.
//! Rendering, weekend checks and day bounds take an IANA zone name;
//! `"UTC"` is the default everywhere.

mod timestamp;
mod zone;

pub use timestamp::Timestamp;
pub use zone::{resolve_zone, DEFAULT_ZONE};

pub use chrono::Duration;
pub use chrono_tz::Tz;
