use crate::GithubError;

use dc_config::ConfigError;
use dc_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Start-up failures of the server binary
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("GitHub client error: {0}")]
    Github(#[from] GithubError),

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for ServerError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
