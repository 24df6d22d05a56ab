//! Opt-in parsing of the ISO-8601 strings carried in timestamp fields.
//!
//! Both record forms keep timestamps as text. These helpers are for callers
//! that need a real instant; they never alter the stored string.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Formats accepted for timestamps without an offset, read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a timestamp field.
///
/// Accepts RFC 3339 (`2024-01-01T00:00:00Z`, `2024-01-01T08:00:00+08:00`)
/// and offset-less values as produced for `timestamp without time zone`
/// columns. Returns `None` for the empty default and for malformed text.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Render an instant the way timestamp fields are expected to look.
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_rfc3339_utc() {
        let dt = parse("2024-01-01T00:00:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse("2024-01-01T08:00:00+08:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let dt = parse("2024-03-05T10:20:30.123456").unwrap();
        assert_eq!(dt.timestamp(), 1_709_634_030);

        let dt = parse("2024-03-05 10:20:30").unwrap();
        assert_eq!(dt.timestamp(), 1_709_634_030);
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(parse("").is_none());
        assert!(parse("   ").is_none());
        assert!(parse("yesterday").is_none());
        assert!(parse("2024-13-01T00:00:00Z").is_none());
    }

    #[test]
    fn test_format_round_trips_through_parse() {
        let dt = Utc.with_ymd_and_hms(2025, 10, 1, 14, 30, 0).unwrap();
        let text = format(&dt);
        assert_eq!(text, "2025-10-01T14:30:00Z");
        assert_eq!(parse(&text), Some(dt));
    }
}
