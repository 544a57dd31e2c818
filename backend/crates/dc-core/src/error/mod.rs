use crate::FieldError;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {errors:?} {location}")]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("UUID parse error: {source} {location}")]
    Uuid {
        source: uuid::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Field-level errors carried by a validation failure, empty otherwise
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors, .. } => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
