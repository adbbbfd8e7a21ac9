/// What happened to a single record during reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    Inserted,
    Updated,
    /// Not an object, or no usable `userID`
    Skipped,
    /// The store rejected the lookup or the write
    Failed,
}
