pub mod reconcile_outcome;
pub mod sync_summary;
