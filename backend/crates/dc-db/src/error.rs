use std::panic::Location;

use dc_core::CoreError;
use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Corrupt row: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile document error: {source} {location}")]
    Document {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Profile not found for owner {owner_id} {location}")]
    ProfileNotFound {
        owner_id: Uuid,
        location: ErrorLocation,
    },

    #[error("No user {owner_id} to own a profile {location}")]
    OwnerNotFound {
        owner_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Rejected profile fields: {0}")]
    Rejected(#[from] CoreError),

    #[error("User already exists: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Document {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
