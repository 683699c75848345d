//! IANA zone lookup

use chrono_tz::Tz;
use yardstick_core::{Result, YardstickError};

/// Zone `Timestamp` renders in through `Display`
pub const DEFAULT_ZONE: &str = "UTC";

/// Resolve an IANA zone name such as `"Europe/Paris"`
pub fn resolve_zone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| YardstickError::UnknownTimeZone(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yardstick_core::codes;

    #[test]
    fn test_known_zones() {
        assert_eq!(resolve_zone("UTC").unwrap(), Tz::UTC);
        assert_eq!(resolve_zone("America/New_York").unwrap(), Tz::America__New_York);
        assert_eq!(resolve_zone(DEFAULT_ZONE).unwrap(), Tz::UTC);
    }

    #[test]
    fn test_unknown_zone() {
        let err = resolve_zone("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err.code(), codes::UNKNOWN_TIMEZONE);
        assert_eq!(err.to_string(), "Unknown timezone: Mars/Olympus_Mons");
    }
}
