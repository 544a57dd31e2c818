use dc_auth::TokenCodec;
use dc_config::Config;
use dc_server::{AppState, GithubClient, ServerError, build_router, logger};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; DC_* variables may also come from the environment
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = match config.logging.file {
        Some(ref filename) => {
            let log_dir = config.log_dir()?;
            std::fs::create_dir_all(&log_dir).map_err(ServerError::from)?;
            Some(log_dir.join(filename))
        }
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting dc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database pool + migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = dc_db::create_pool(&database_path, config.database.max_connections)
        .await
        .map_err(ServerError::from)?;
    info!("Database ready");

    // validate() guarantees the secret is present
    let secret = config.auth.jwt_secret.clone().unwrap_or_default();
    let tokens = TokenCodec::with_hs256(secret.as_bytes(), config.auth.token_ttl());
    info!("Session tokens: HS256, ttl {}", humantime::format_duration(tokens.ttl()));

    let github = GithubClient::new(&config.github).map_err(ServerError::from)?;

    let app = build_router(AppState::new(pool, tokens, github));

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServerError::from)?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            // Keep serving; the process can still be killed
            std::future::pending::<()>().await
        }
    }
}
