use um_server::error::Result as ServerErrorResult;
use um_server::{AppState, ExternalClient, build_router, logger};

use std::time::Duration;

use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = um_config::Config::load()?;
    config.validate()?;

    // Logger first, before anything else logs
    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting um-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&database_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;
    info!("Database connection established");

    info!("Running database migrations...");
    um_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let external = ExternalClient::new(&config.external, &config.retry)?;
    if !external.is_configured() {
        warn!("External API URL not set; /api/fetch-external-data will fail");
    }

    let bind_addr = config.bind_addr();
    let app = build_router(AppState::new(pool.clone(), config, external));

    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            // Without a signal handler, run until killed
            log::error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
