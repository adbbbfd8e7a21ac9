//! Batch upsert of upstream users into the local mirror.
//!
//! Records are handled one at a time and a failure never aborts the batch;
//! it is counted and logged instead.

use crate::{Result as DbErrorResult, UserRepository};

use um_core::{ExternalUser, ReconcileOutcome, SyncSummary, UserRecord};

use chrono::Utc;
use log::{debug, error, info, warn};
use serde_json::Value;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct UserReconciler {
    repo: UserRepository,
}

impl UserReconciler {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repo: UserRepository::new(pool),
        }
    }

    /// Insert or overwrite every record in `users`, keyed by `userID`.
    pub async fn reconcile(&self, users: Vec<Value>) -> SyncSummary {
        let mut summary = SyncSummary::new(users.len());

        for (index, value) in users.into_iter().enumerate() {
            let outcome = self.reconcile_one(index, value).await;
            summary.record(outcome);
        }

        info!(
            "Sync complete: {} received, {} new, {} updated, {} skipped, {} errors",
            summary.total_received,
            summary.new_users,
            summary.updated_users,
            summary.skipped,
            summary.errors
        );

        summary
    }

    async fn reconcile_one(&self, index: usize, value: Value) -> ReconcileOutcome {
        let user = match ExternalUser::from_value(value) {
            Ok(user) => user,
            Err(e) => {
                warn!("Skipping record {}: {}", index, e);
                return ReconcileOutcome::Skipped;
            }
        };

        let record = match UserRecord::from_external(&user, Utc::now()) {
            Ok(record) => record,
            Err(_) => {
                warn!("Skipping record {}: missing userID", index);
                return ReconcileOutcome::Skipped;
            }
        };

        match self.upsert(&record).await {
            Ok(outcome) => {
                debug!("User {} {:?}", record.user_id, outcome);
                outcome
            }
            Err(e) => {
                error!("Failed to store user {}: {}", record.user_id, e);
                ReconcileOutcome::Failed
            }
        }
    }

    async fn upsert(&self, record: &UserRecord) -> DbErrorResult<ReconcileOutcome> {
        if self.repo.exists(record.user_id).await? {
            // A concurrent delete between the lookup and the write leaves
            // nothing to update; count that as an insert of the new row.
            if self.repo.update(record).await? {
                return Ok(ReconcileOutcome::Updated);
            }
        }

        self.repo.insert(record).await?;
        Ok(ReconcileOutcome::Inserted)
    }

    /// Insert the given users only where their `userID` is not stored yet.
    /// Returns the records that were inserted.
    pub async fn insert_missing(&self, users: Vec<UserRecord>) -> DbErrorResult<Vec<UserRecord>> {
        let mut created = Vec::new();

        for user in users {
            if self.repo.exists(user.user_id).await? {
                debug!("User {} already present, leaving it untouched", user.user_id);
                continue;
            }

            self.repo.insert(&user).await?;
            created.push(user);
        }

        info!("Inserted {} seed users", created.len());
        Ok(created)
    }
}
