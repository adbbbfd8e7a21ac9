//! Search, country and date-bucket filtering.

use crate::{UserSummary, ViewError};

use std::{fmt, panic::Location, str::FromStr};

use chrono::{DateTime, Days, Months, NaiveDate, TimeZone};
use error_location::ErrorLocation;

/// Coarse window over the local calendar date of `openDate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateBucket {
    #[default]
    All,
    Today,
    /// Today and the six days before it
    Week,
    /// On or after the same day one calendar month ago
    Month,
}

impl DateBucket {
    /// Earliest local date the bucket admits, `None` for `All`.
    pub fn earliest(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateBucket::All => None,
            DateBucket::Today => Some(today),
            DateBucket::Week => Some(today.checked_sub_days(Days::new(6)).unwrap_or(today)),
            DateBucket::Month => Some(
                today
                    .checked_sub_months(Months::new(1))
                    .unwrap_or(NaiveDate::MIN),
            ),
        }
    }

    fn admits(self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        let Some(earliest) = self.earliest(today) else {
            return true;
        };

        // Users without an open date are never hidden by a date bucket
        match (self, date) {
            (_, None) => true,
            (DateBucket::Today, Some(date)) => date == today,
            (_, Some(date)) => date >= earliest,
        }
    }
}

/// An empty name selects `All`.
impl FromStr for DateBucket {
    type Err = ViewError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(DateBucket::All),
            "today" => Ok(DateBucket::Today),
            "week" => Ok(DateBucket::Week),
            "month" => Ok(DateBucket::Month),
            _ => Err(ViewError::UnknownDateBucket {
                name: s.trim().to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl fmt::Display for DateBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateBucket::All => "all",
            DateBucket::Today => "today",
            DateBucket::Week => "week",
            DateBucket::Month => "month",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub query: String,
    pub country: Option<String>,
    pub date: DateBucket,
}

impl UserFilter {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.country.is_none() && self.date == DateBucket::All
    }

    /// True when `user` passes every active constraint. Calendar dates are
    /// taken in the time zone of `now`.
    pub fn matches<Tz: TimeZone>(&self, user: &UserSummary, now: &DateTime<Tz>) -> bool {
        self.matches_query(user) && self.matches_country(user) && self.matches_date(user, now)
    }

    fn matches_query(&self, user: &UserSummary) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        let contains = |text: &str| text.to_lowercase().contains(&query);

        [
            user.first_name.as_deref(),
            user.last_name.as_deref(),
            user.username.as_deref(),
            user.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(contains)
            || contains(&user.user_id.to_string())
            || user.account_id.is_some_and(|id| contains(&id.to_string()))
    }

    fn matches_country(&self, user: &UserSummary) -> bool {
        match &self.country {
            None => true,
            Some(country) => user.country.as_deref() == Some(country.as_str()),
        }
    }

    fn matches_date<Tz: TimeZone>(&self, user: &UserSummary, now: &DateTime<Tz>) -> bool {
        let tz = now.timezone();
        let local_date = user
            .open_date
            .map(|date| date.with_timezone(&tz).date_naive());

        self.date.admits(local_date, now.date_naive())
    }
}
