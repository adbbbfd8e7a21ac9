//! User repository for the local mirror table.
//!
//! Writes are whole-row: `update` overwrites every typed column and the
//! payload blob. There is no version column and no merge; the last writer wins.

use crate::{DbError, Result as DbErrorResult};

use um_core::{UserRecord, UserStats};

use std::panic::Location;

use chrono::{DateTime, Duration, TimeZone, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const SELECT_COLUMNS: &str = r#"
    user_id, first_name, last_name, username, country,
    account_id, user_type, parent_id, email_verified, open_date,
    full_data, created_at, updated_at
"#;

#[derive(Debug, FromRow)]
struct UserRow {
    user_id: i64,
    first_name: String,
    last_name: String,
    username: String,
    country: String,
    account_id: Option<i64>,
    user_type: i64,
    parent_id: Option<i64>,
    email_verified: bool,
    open_date: Option<i64>,
    full_data: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: UserRow) -> DbErrorResult<Self> {
        let full_data = serde_json::from_str(&r.full_data).map_err(|e| DbError::Decode {
            message: format!("Invalid JSON in users.full_data for {}: {}", r.user_id, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(UserRecord {
            user_id: r.user_id,
            first_name: r.first_name,
            last_name: r.last_name,
            username: r.username,
            country: r.country,
            account_id: r.account_id,
            user_type: r.user_type,
            parent_id: r.parent_id,
            email_verified: r.email_verified,
            open_date: r.open_date.and_then(|ts| DateTime::from_timestamp(ts, 0)),
            full_data,
            created_at: decode_timestamp(r.created_at, "users.created_at")?,
            updated_at: decode_timestamp(r.updated_at, "users.updated_at")?,
        })
    }
}

#[track_caller]
fn decode_timestamp(ts: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Decode {
        message: format!("Invalid timestamp in {}: {}", column, ts),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn encode_payload(user: &UserRecord) -> DbErrorResult<String> {
    serde_json::to_string(&user.full_data).map_err(|source| DbError::Encode {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn exists(&self, user_id: i64) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    pub async fn insert(&self, user: &UserRecord) -> DbErrorResult<()> {
        let full_data = encode_payload(user)?;

        sqlx::query(
            r#"
                INSERT INTO users (
                    user_id, first_name, last_name, username, country,
                    account_id, user_type, parent_id, email_verified, open_date,
                    full_data, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.user_id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.country)
        .bind(user.account_id)
        .bind(user.user_type)
        .bind(user.parent_id)
        .bind(user.email_verified)
        .bind(user.open_date.map(|dt| dt.timestamp()))
        .bind(full_data)
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Replace every typed column and the payload. Returns false when no row
    /// matched `user_id`.
    pub async fn update(&self, user: &UserRecord) -> DbErrorResult<bool> {
        let full_data = encode_payload(user)?;

        let result = sqlx::query(
            r#"
                UPDATE users SET
                    first_name = ?, last_name = ?, username = ?, country = ?,
                    account_id = ?, user_type = ?, parent_id = ?, email_verified = ?,
                    open_date = ?, full_data = ?, updated_at = ?
                WHERE user_id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.country)
        .bind(user.account_id)
        .bind(user.user_type)
        .bind(user.parent_id)
        .bind(user.email_verified)
        .bind(user.open_date.map(|dt| dt.timestamp()))
        .bind(full_data)
        .bind(user.updated_at.timestamp())
        .bind(user.user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> DbErrorResult<Option<UserRecord>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM users WHERE user_id = ?");

        let row: Option<UserRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRecord::try_from).transpose()
    }

    /// Newest accounts first. Users without an open date sort last.
    pub async fn find_recent(&self, limit: i64) -> DbErrorResult<Vec<UserRecord>> {
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM users \
             ORDER BY open_date IS NULL, open_date DESC, user_id ASC \
             LIMIT ?"
        );

        let rows: Vec<UserRow> = sqlx::query_as(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(UserRecord::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// Dashboard counters. "Today" is the calendar day of `now` in its own
    /// time zone; "recent" is the trailing 7 x 24 hours.
    pub async fn stats<Tz: TimeZone>(&self, now: DateTime<Tz>) -> DbErrorResult<UserStats> {
        let (day_start, day_end) = day_bounds(&now);
        let week_ago = (now.with_timezone(&Utc) - Duration::days(7)).timestamp();

        let total_users = self.count().await?;

        let today_users: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE open_date >= ? AND open_date < ?",
        )
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&self.pool)
        .await?;

        let countries: i64 = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT country) FROM users WHERE country IS NOT NULL AND country != ''",
        )
        .fetch_one(&self.pool)
        .await?;

        let recent_users: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE open_date >= ?")
                .bind(week_ago)
                .fetch_one(&self.pool)
                .await?;

        Ok(UserStats {
            total_users,
            today_users,
            countries,
            recent_users,
        })
    }
}

/// Unix-second bounds `[start, end)` of the calendar day containing `now`.
fn day_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> (i64, i64) {
    let tz = now.timezone();
    let date = now.date_naive();

    let start_of = |d: chrono::NaiveDate| {
        d.and_hms_opt(0, 0, 0)
            .and_then(|naive| tz.from_local_datetime(&naive).earliest())
            .map(|dt| dt.timestamp())
    };

    let start = start_of(date).unwrap_or_else(|| now.timestamp());
    let end = date
        .succ_opt()
        .and_then(start_of)
        .unwrap_or(start + Duration::days(1).num_seconds());

    (start, end)
}
