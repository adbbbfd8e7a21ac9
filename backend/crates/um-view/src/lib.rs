//! Client-side view over the mirrored user list.
//!
//! `UserView` owns the last loaded list and everything derived from it:
//! the filtered subset, the current page, the layout, and pending notices.

pub mod error;
pub mod export;
pub mod filter;
pub mod format;
pub mod notice;
pub mod pagination;
pub mod placeholder;
pub mod render;
pub mod stats;
pub mod user_summary;
pub mod view;

#[cfg(test)]
mod tests;

pub use error::{Result, ViewError};
pub use export::{CsvExport, export_filename, to_csv};
pub use filter::{DateBucket, UserFilter};
pub use format::{format_date, format_date_in};
pub use notice::{Notice, NoticeLevel};
pub use pagination::{PAGE_SIZE, Pagination};
pub use placeholder::{PLACEHOLDER_COUNT, placeholder_users, placeholder_users_with};
pub use render::{render_detail, render_grid, render_table};
pub use stats::ViewStats;
pub use user_summary::{UserSummary, users_from_response};
pub use view::{UserView, ViewMode};
