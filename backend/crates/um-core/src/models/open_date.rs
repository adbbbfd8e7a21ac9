use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Naive layouts accepted besides RFC 3339. Naive values are read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Epoch values with at least this magnitude are milliseconds. As seconds it
/// would be past the year 5000.
const EPOCH_MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Shortest all-digit string read as an epoch value
const EPOCH_MIN_DIGITS: usize = 9;

/// Decode an upstream `openDate` of any shape: date string, or epoch seconds
/// or milliseconds as a number. Falsy values give `None`.
pub fn open_date_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_open_date(s),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(open_date_from_epoch),
        _ => None,
    }
}

/// Seconds or milliseconds since the Unix epoch, told apart by magnitude.
pub fn open_date_from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value == 0 {
        return None;
    }

    if value.unsigned_abs() >= EPOCH_MILLIS_THRESHOLD as u64 {
        DateTime::from_timestamp_millis(value)
    } else {
        DateTime::from_timestamp(value, 0)
    }
}

/// Parse an upstream `openDate` string.
///
/// Returns `None` for anything that is not a recognised date; the raw value
/// still survives in the stored payload.
pub fn parse_open_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Some(naive.and_utc());
        }
    }

    if let Some(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Some(date.and_utc());
    }

    if input.len() >= EPOCH_MIN_DIGITS && input.bytes().all(|b| b.is_ascii_digit()) {
        return input.parse().ok().and_then(open_date_from_epoch);
    }

    None
}
