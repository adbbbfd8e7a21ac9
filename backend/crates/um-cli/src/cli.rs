use crate::commands::Commands;

use clap::Parser;

pub(crate) const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

#[derive(Parser)]
#[command(name = "um")]
#[command(about = "User mirror CLI: query, sync and browse mirrored users")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    pub(crate) server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}
