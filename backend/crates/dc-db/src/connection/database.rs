use crate::{DbError, Result};

use std::panic::Location;
use std::path::Path;

use error_location::ErrorLocation;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open (creating if missing) the database file and bring its schema up to date
pub async fn create_pool(db_path: &Path, max_connections: u32) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| DbError::Initialization {
                message: format!("Failed to create database directory: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    log::info!("Database ready at {}", db_path.display());

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: format!("Migration failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(())
}
