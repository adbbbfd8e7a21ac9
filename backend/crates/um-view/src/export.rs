//! CSV export of the filtered user list.

use crate::{Result as ViewResult, UserSummary, ViewError, format_date_in};

use std::panic::Location;

use chrono::{NaiveDate, TimeZone};
use error_location::ErrorLocation;

const HEADERS: [&str; 8] = [
    "User ID",
    "First Name",
    "Last Name",
    "Username",
    "Country",
    "Account ID",
    "Join Date",
    "User Type",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
    pub rows: usize,
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("users_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Render `users` as CSV. Every field is quoted; join dates are shown in `tz`.
#[track_caller]
pub fn to_csv<Tz>(users: &[UserSummary], tz: &Tz, date: NaiveDate) -> ViewResult<CsvExport>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if users.is_empty() {
        return Err(ViewError::NothingToExport {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let mut lines = Vec::with_capacity(users.len() + 1);
    lines.push(row(HEADERS.iter().map(|h| h.to_string())));

    for user in users {
        let fields = [
            user.user_id.to_string(),
            user.first_name.clone().unwrap_or_default(),
            user.last_name.clone().unwrap_or_default(),
            user.username.clone().unwrap_or_default(),
            user.country.clone().unwrap_or_default(),
            user.account_id.map(|id| id.to_string()).unwrap_or_default(),
            user.open_date
                .map(|d| format_date_in(Some(d), tz))
                .unwrap_or_default(),
            user.user_type.map(|t| t.to_string()).unwrap_or_default(),
        ];
        lines.push(row(fields.into_iter()));
    }

    Ok(CsvExport {
        filename: export_filename(date),
        content: lines.join("\n"),
        rows: users.len(),
    })
}

fn row(fields: impl Iterator<Item = String>) -> String {
    fields.map(|f| quote(&f)).collect::<Vec<_>>().join(",")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
