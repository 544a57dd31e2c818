//! Field-level validation shared by request handlers.
//!
//! Handlers collect every problem with an input before rejecting it, so a
//! client can render all of them at once instead of fixing one per round-trip.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Date format accepted for `from` / `to` fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Offending field, `None` for errors about the request as a whole
    pub field: Option<String>,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: Some(field.to_string()),
            message: message.to_string(),
        }
    }

    pub fn general(message: &str) -> Self {
        Self {
            field: None,
            message: message.to_string(),
        }
    }
}

/// Accumulates field errors; converts into `CoreError::Validation` if any
#[derive(Debug, Default)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless `value` is present and not blank
    pub fn require(&mut self, field: &str, value: Option<&str>, message: &str) -> &mut Self {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.0.push(FieldError::new(field, message));
        }
        self
    }

    /// Record an error when `condition` does not hold
    pub fn check(&mut self, field: &str, condition: bool, message: &str) -> &mut Self {
        if !condition {
            self.0.push(FieldError::new(field, message));
        }
        self
    }

    /// Parse an optional `YYYY-MM-DD` value, recording an error if malformed.
    /// Absent or blank values yield `None` without an error.
    pub fn date(&mut self, field: &str, value: Option<&str>) -> Option<NaiveDate> {
        let raw = value.map(str::trim).filter(|v| !v.is_empty())?;
        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.0.push(FieldError::new(
                    field,
                    &format!("{} must be a date (YYYY-MM-DD)", field),
                ));
                None
            }
        }
    }

    pub fn push(&mut self, error: FieldError) -> &mut Self {
        self.0.push(error);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[track_caller]
    pub fn into_result(self) -> CoreErrorResult<()> {
        if self.0.is_empty() {
            return Ok(());
        }

        Err(CoreError::Validation {
            errors: self.0,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Parse an identifier received as text (path segment, stored column)
#[track_caller]
pub fn parse_id(raw: &str) -> CoreErrorResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|source| CoreError::Uuid {
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Loose address check: one `@`, non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
