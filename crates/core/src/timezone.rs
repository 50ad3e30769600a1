//! Timezone handling utilities
//!
//! The doors instant is a wall-clock time at the venue. Unless the event
//! names an IANA zone, the runtime's local zone is used.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{CoreError, CoreResult};

/// Parse an IANA timezone string (e.g., "America/Chicago")
///
/// # Examples
///
/// ```
/// use rocktober_core::timezone::parse_timezone;
///
/// let tz = parse_timezone("America/Chicago").unwrap();
/// assert_eq!(tz.name(), "America/Chicago");
/// ```
pub fn parse_timezone(tz_str: &str) -> CoreResult<Tz> {
    tz_str
        .parse::<Tz>()
        .map_err(|_| CoreError::InvalidTimezone(tz_str.to_string()))
}

/// Resolve a wall-clock time in `tz` to a UTC instant
///
/// Ambiguous times (DST fall-back) resolve to the earliest instant.
/// Times skipped by a DST gap are an error.
pub fn resolve_local<Z: TimeZone>(tz: &Z, naive: NaiveDateTime) -> CoreResult<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CoreError::NonexistentLocalTime(naive.to_string()))
}

/// Zone in which the event's date and doors time are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventZone {
    /// The runtime's local zone
    #[default]
    Local,
    /// A fixed IANA zone
    Named(Tz),
}

impl EventZone {
    /// Build from an optional IANA name; `None` means local time
    pub fn from_name(name: Option<&str>) -> CoreResult<Self> {
        match name {
            Some(name) => parse_timezone(name).map(Self::Named),
            None => Ok(Self::Local),
        }
    }

    /// Resolve a wall-clock time in this zone to a UTC instant
    pub fn resolve(&self, naive: NaiveDateTime) -> CoreResult<DateTime<Utc>> {
        match self {
            Self::Local => resolve_local(&Local, naive),
            Self::Named(tz) => resolve_local(tz, naive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn naive(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_timezone_valid() {
        let tz = parse_timezone("America/Chicago");
        assert!(tz.is_ok());
        assert_eq!(tz.unwrap().name(), "America/Chicago");
    }

    #[test]
    fn test_parse_timezone_invalid() {
        match parse_timezone("Invalid/Timezone") {
            Err(CoreError::InvalidTimezone(s)) => assert_eq!(s, "Invalid/Timezone"),
            other => panic!("Expected InvalidTimezone error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_chicago_doors_to_utc() {
        let tz = parse_timezone("America/Chicago").unwrap();

        // 17:00 CDT (UTC-5) on 2025-10-18
        let utc = resolve_local(&tz, naive(2025, 10, 18, 17, 0)).unwrap();

        assert_eq!(utc.hour(), 22);
        assert_eq!(utc.minute(), 0);
    }

    #[test]
    fn test_resolve_ambiguous_takes_earliest() {
        let tz = parse_timezone("America/Chicago").unwrap();

        // 01:30 happens twice on 2025-11-02; first pass is still CDT (UTC-5)
        let utc = resolve_local(&tz, naive(2025, 11, 2, 1, 30)).unwrap();

        assert_eq!(utc.hour(), 6);
        assert_eq!(utc.minute(), 30);
    }

    #[test]
    fn test_resolve_dst_gap_is_error() {
        let tz = parse_timezone("America/Chicago").unwrap();

        // 02:30 is skipped on 2025-03-09
        let result = resolve_local(&tz, naive(2025, 3, 9, 2, 30));
        assert!(matches!(result, Err(CoreError::NonexistentLocalTime(_))));
    }

    #[test]
    fn test_event_zone_from_name() {
        assert_eq!(EventZone::from_name(None).unwrap(), EventZone::Local);
        assert_eq!(
            EventZone::from_name(Some("Europe/London")).unwrap(),
            EventZone::Named(chrono_tz::Europe::London)
        );
        assert!(EventZone::from_name(Some("Mars/Olympus")).is_err());
    }

    #[test]
    fn test_event_zone_named_resolve() {
        let zone = EventZone::Named(chrono_tz::UTC);
        let utc = zone.resolve(naive(2025, 10, 18, 17, 0)).unwrap();
        assert_eq!(utc.hour(), 17);
    }
}
