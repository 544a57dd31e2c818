use dc_core::FieldError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        /// Field-level rejections of a validation failure
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Token file error: {message} {location}")]
    TokenFile {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn token_file(message: String, source: std::io::Error) -> Self {
        ClientError::TokenFile {
            message,
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    /// HTTP status of a server-side rejection, `None` when the server was never reached
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for showing to a person
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Http { .. } => "Server unreachable".to_string(),
            ClientError::Json { .. } => "Unexpected server response".to_string(),
            ClientError::TokenFile { message, .. } => message.clone(),
        }
    }

    /// One message per rejected field, or the overall message when there is no list
    pub fn field_messages(&self) -> Vec<String> {
        match self {
            ClientError::Api { errors, .. } if !errors.is_empty() => {
                errors.iter().map(|e| e.message.clone()).collect()
            }
            other => vec![other.user_message()],
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
