use crate::ReconcileOutcome;

use serde::{Deserialize, Serialize};

/// Per-batch counts returned by the sync endpoints
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncSummary {
    pub total_received: usize,
    pub new_users: usize,
    pub updated_users: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl SyncSummary {
    pub fn new(total_received: usize) -> Self {
        Self {
            total_received,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: ReconcileOutcome) {
        match outcome {
            ReconcileOutcome::Inserted => self.new_users += 1,
            ReconcileOutcome::Updated => self.updated_users += 1,
            ReconcileOutcome::Skipped => self.skipped += 1,
            ReconcileOutcome::Failed => self.errors += 1,
        }
    }

    /// Records that reached the store successfully
    pub fn processed(&self) -> usize {
        self.new_users + self.updated_users
    }
}
