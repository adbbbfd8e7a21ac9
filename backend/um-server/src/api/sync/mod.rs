pub mod fetch_external;
pub mod save_users;
pub mod sync_response;
pub mod test_data;
