pub mod user_reconciler;
