use crate::UserSummary;

use std::collections::HashSet;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Counters shown above the user list, computed from the loaded users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewStats {
    pub total: usize,
    pub today: usize,
    /// Opened within the last 7 x 24 hours
    pub recent: usize,
    pub countries: usize,
}

impl ViewStats {
    pub fn compute<Tz: TimeZone>(users: &[UserSummary], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let week_ago = now.with_timezone(&Utc) - Duration::days(7);

        let dates = || users.iter().filter_map(|user| user.open_date);

        let countries: HashSet<&str> = users
            .iter()
            .filter_map(|user| user.country.as_deref())
            .filter(|country| !country.is_empty())
            .collect();

        Self {
            total: users.len(),
            today: dates()
                .filter(|date| date.with_timezone(&tz).date_naive() == today)
                .count(),
            recent: dates().filter(|date| *date >= week_ago).count(),
            countries: countries.len(),
        }
    }
}
