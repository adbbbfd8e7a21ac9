//! um-cli library
//!
//! HTTP client for the user mirror API and the terminal dashboard built on
//! `um_view::UserView`.

pub mod client;
pub mod dashboard;
pub mod logger;
pub mod watch;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use dashboard::{Control, Dashboard, LOAD_LIMIT, Shortcut};
pub use watch::{REFRESH_INTERVAL, run};
