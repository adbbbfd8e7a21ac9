use chrono::{DateTime, Local, TimeZone, Utc};

/// Display form of an open date in the local time zone, e.g. `Jan 15, 2024, 10:30 AM`.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    format_date_in(date, &Local)
}

pub fn format_date_in<Tz>(date: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match date {
        Some(date) => date
            .with_timezone(tz)
            .format("%b %-d, %Y, %I:%M %p")
            .to_string(),
        None => "N/A".to_string(),
    }
}
