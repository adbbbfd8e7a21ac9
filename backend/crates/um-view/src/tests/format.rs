use crate::format_date_in;

use chrono::{FixedOffset, Utc};
use googletest::prelude::*;

use super::utc;

#[test]
fn given_morning_date_when_formatted_then_short_month_and_twelve_hour_clock() {
    let formatted = format_date_in(Some(utc(2024, 1, 15, 10, 30)), &Utc);

    assert_that!(formatted, eq("Jan 15, 2024, 10:30 AM"));
}

#[test]
fn given_afternoon_date_when_formatted_then_hour_is_padded_pm() {
    let formatted = format_date_in(Some(utc(2024, 7, 4, 14, 5)), &Utc);

    assert_that!(formatted, eq("Jul 4, 2024, 02:05 PM"));
}

#[test]
fn given_offset_zone_when_formatted_then_local_wall_clock_is_shown() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();

    let formatted = format_date_in(Some(utc(2024, 1, 15, 23, 0)), &tz);

    assert_that!(formatted, eq("Jan 16, 2024, 01:00 AM"));
}

#[test]
fn given_missing_date_when_formatted_then_not_available() {
    assert_that!(format_date_in(None, &Utc), eq("N/A"));
}
