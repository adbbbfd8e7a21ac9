pub mod external_user;
pub(crate) mod lenient;
pub mod open_date;
pub mod user_record;
pub mod user_stats;
