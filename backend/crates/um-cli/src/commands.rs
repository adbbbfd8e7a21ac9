use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Layout {
    Table,
    Grid,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List users, newest first
    Users {
        #[arg(long)]
        limit: Option<i64>,

        /// Render as text instead of JSON
        #[arg(long, value_enum)]
        layout: Option<Layout>,
    },

    /// Show one user with its stored payload
    User { id: i64 },

    /// Dashboard counters
    Stats,

    /// Server and database health
    Health,

    /// Save a batch of upstream records read from a JSON file
    Save { file: PathBuf },

    /// Ask the server to pull and reconcile the upstream user list
    FetchExternal,

    /// Insert the demo users
    TestData,

    /// Export users to a CSV file
    Export {
        /// Search text
        #[arg(long, default_value = "")]
        query: String,

        #[arg(long)]
        country: Option<String>,

        /// today, week, month or all
        #[arg(long, default_value = "all")]
        date: String,

        /// Directory the CSV file is written to
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },

    /// Interactive dashboard with auto-refresh
    Watch {
        /// Directory CSV exports are written to
        #[arg(long, default_value = ".")]
        output: PathBuf,
    },
}
