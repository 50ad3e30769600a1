//! Human-readable date and time strings
//!
//! Output follows US English conventions: `5:00 PM` and
//! `Saturday, October 18, 2025`.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CoreError, CoreResult};

/// Parse a 24-hour `HH:MM` string
///
/// The hour may be one or two digits, the minute must be exactly two.
/// Signs, whitespace and seconds are rejected.
pub fn parse_time_of_day(hhmm: &str) -> CoreResult<NaiveTime> {
    let invalid = || CoreError::InvalidTimeOfDay(hhmm.to_string());

    let (hour, minute) = hhmm.split_once(':').ok_or_else(invalid)?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_event_date(date: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| CoreError::InvalidDate(date.to_string()))
}

/// Render a time with numeric hour, two-digit minute and AM/PM
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Render an `HH:MM` string as a short time, e.g. `"17:00"` -> `"5:00 PM"`
///
/// # Examples
///
/// ```
/// use rocktober_core::format::format_time_of_day;
///
/// assert_eq!(format_time_of_day("17:00").unwrap(), "5:00 PM");
/// ```
pub fn format_time_of_day(hhmm: &str) -> CoreResult<String> {
    parse_time_of_day(hhmm).map(format_time)
}

/// Render a date with full weekday, full month, day and year
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rocktober_core::format::format_long_date;
///
/// let date = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
/// assert_eq!(format_long_date(date), "Saturday, October 18, 2025");
/// ```
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_format_time_of_day_afternoon() {
        assert_eq!(format_time_of_day("17:00").unwrap(), "5:00 PM");
    }

    #[test]
    fn test_format_time_of_day_edges() {
        assert_eq!(format_time_of_day("00:05").unwrap(), "12:05 AM");
        assert_eq!(format_time_of_day("12:00").unwrap(), "12:00 PM");
        assert_eq!(format_time_of_day("23:59").unwrap(), "11:59 PM");
        assert_eq!(format_time_of_day("9:30").unwrap(), "9:30 AM");
    }

    #[test]
    fn test_parse_time_of_day_values() {
        let time = parse_time_of_day("07:45").unwrap();
        assert_eq!(time.hour(), 7);
        assert_eq!(time.minute(), 45);
        assert_eq!(time.second(), 0);
    }

    #[test]
    fn test_parse_time_of_day_rejects_malformed() {
        let bad = [
            "", "17", "17:", ":00", "24:00", "12:60", "17:0", "017:00", "-1:00", "+5:00",
            " 5:00", "5:00 ", "17:00:00", "ab:cd", "5.5:00", "17-00",
        ];

        for input in bad {
            let result = parse_time_of_day(input);
            assert!(
                matches!(result, Err(CoreError::InvalidTimeOfDay(ref s)) if s == input),
                "Expected rejection for {input:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        let formatted = format_long_date(date);
        assert!(formatted.contains("October 18, 2025"));
        assert!(formatted.starts_with("Saturday"));
    }

    #[test]
    fn test_format_long_date_single_digit_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(format_long_date(date), "Sunday, March 1, 2026");
    }

    #[test]
    fn test_formatters_are_idempotent() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 18).unwrap();
        assert_eq!(format_long_date(date), format_long_date(date));
        assert_eq!(
            format_time_of_day("17:00").unwrap(),
            format_time_of_day("17:00").unwrap()
        );
    }

    #[test]
    fn test_parse_event_date() {
        assert_eq!(
            parse_event_date("2025-10-18").unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 18).unwrap()
        );
        assert!(matches!(
            parse_event_date("2025-02-30"),
            Err(CoreError::InvalidDate(_))
        ));
    }
}
