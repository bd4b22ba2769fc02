//! Parsing helpers for loosely typed request values.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::server::error::validation::ValidationErrors;

/// Parses a calendar date from `YYYY-MM-DD` or from the date part of an RFC 3339 timestamp.
///
/// # Arguments
/// - `value` - The raw string from the request
///
/// # Returns
/// - `Some(NaiveDate)` - Successfully parsed date
/// - `None` - The value is not a recognizable ISO 8601 date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Parses a UTC timestamp from RFC 3339, or from a bare date interpreted as midnight UTC.
///
/// # Returns
/// - `Some(DateTime<Utc>)` - Successfully parsed timestamp
/// - `None` - The value is neither an RFC 3339 timestamp nor a `YYYY-MM-DD` date
pub fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        })
}

/// Validates a UUID path parameter, returning it in canonical hyphenated lowercase form.
///
/// # Returns
/// - `Ok(String)` - Normalized UUID
/// - `Err(ValidationErrors)` - Single `id` failure with "ID must be a valid UUID"
pub fn parse_uuid_id(value: &str) -> Result<String, ValidationErrors> {
    uuid::Uuid::parse_str(value.trim())
        .map(|id| id.hyphenated().to_string())
        .map_err(|_| ValidationErrors::single("id", "ID must be a valid UUID"))
}

/// Validates an integer path parameter.
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(ValidationErrors)` - Single `id` failure with "id must be a number"
pub fn parse_int_id(value: &str) -> Result<i32, ValidationErrors> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ValidationErrors::single("id", "id must be a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_plain_and_timestamped_dates() {
        let plain = parse_date("1990-05-20").unwrap();
        assert_eq!((plain.year(), plain.month(), plain.day()), (1990, 5, 20));

        let stamped = parse_date("2024-02-29T10:00:00Z").unwrap();
        assert_eq!((stamped.month(), stamped.day()), (2, 29));

        assert!(parse_date("20/05/1990").is_none());
        assert!(parse_date("2023-02-30").is_none());
    }

    #[test]
    fn bare_date_becomes_midnight_utc() {
        let dt = parse_datetime("2025-03-10").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (0, 0));

        let offset = parse_datetime("2025-03-10T12:00:00-03:00").unwrap();
        assert_eq!(offset.hour(), 15);
    }

    #[test]
    fn uuid_ids_are_normalized() {
        let id = parse_uuid_id("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        assert_eq!(id, "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!(parse_uuid_id("42").is_err());
    }

    #[test]
    fn int_ids_reject_text() {
        assert_eq!(parse_int_id("17"), Ok(17));
        assert!(parse_int_id("abc").unwrap_err().has_field("id"));
    }
}
