mod error;
mod save_users;
