//! um - user mirror CLI
//!
//! # Examples
//!
//! ```bash
//! # Newest 20 users as a table
//! um users --limit 20 --layout table
//!
//! # Push a batch exported from the trading platform
//! um save users.json --pretty
//!
//! # Interactive dashboard
//! um watch
//! ```

mod cli;
mod commands;

use crate::{
    cli::Cli,
    commands::{Commands, Layout},
};

use um_cli::{CliClientResult, Client, Dashboard, LOAD_LIMIT, logger, watch};
use um_view::{UserFilter, UserView, render_grid, render_table, users_from_response};

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

enum Output {
    Json(Value),
    Text(String),
    Nothing,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::initialize(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let client = Client::new(&cli.server);

    let result: CliClientResult<Output> = match cli.command {
        Commands::Users { limit, layout } => list_users(&client, limit, layout).await,
        Commands::User { id } => client.get_user(id).await.map(Output::Json),
        Commands::Stats => client.get_stats().await.map(Output::Json),
        Commands::Health => client.health().await.map(Output::Json),
        Commands::Save { file } => save_users(&client, &file).await,
        Commands::FetchExternal => client.fetch_external().await.map(Output::Json),
        Commands::TestData => client.create_test_data().await.map(Output::Json),
        Commands::Export {
            query,
            country,
            date,
            output,
        } => export_users(&client, query, country, &date, &output).await,
        Commands::Watch { output } => watch::run(Dashboard::new(client, output))
            .await
            .map(|()| Output::Nothing),
    };

    match result {
        Ok(Output::Json(value)) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Ok(Output::Text(text)) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Ok(Output::Nothing) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn list_users(
    client: &Client,
    limit: Option<i64>,
    layout: Option<Layout>,
) -> CliClientResult<Output> {
    let body = client.list_users(limit).await?;

    let Some(layout) = layout else {
        return Ok(Output::Json(body));
    };

    let users = users_from_response(body)?;
    let text = match layout {
        Layout::Table => render_table(&users),
        Layout::Grid => render_grid(&users),
    };

    Ok(Output::Text(text))
}

async fn save_users(client: &Client, file: &Path) -> CliClientResult<Output> {
    let contents = tokio::fs::read_to_string(file).await?;
    let batch: Value = serde_json::from_str(&contents)?;

    client.save_users(&batch).await.map(Output::Json)
}

async fn export_users(
    client: &Client,
    query: String,
    country: Option<String>,
    date: &str,
    dir: &Path,
) -> CliClientResult<Output> {
    let filter = UserFilter {
        query,
        country,
        date: date.parse()?,
    };

    let body = client.list_users(Some(LOAD_LIMIT)).await?;

    let mut view = UserView::new();
    view.replace_all(users_from_response(body)?);
    view.set_filter(filter);

    let export = view.export_csv()?;
    let path = dir.join(&export.filename);
    tokio::fs::write(&path, &export.content).await?;

    Ok(Output::Text(format!(
        "Exported {} users to {}",
        export.rows,
        path.display()
    )))
}
