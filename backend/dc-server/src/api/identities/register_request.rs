use dc_core::{FieldErrors, Result as CoreErrorResult, is_valid_email};

use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Registration input that passed validation
#[derive(Debug)]
pub struct ValidRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(self) -> CoreErrorResult<ValidRegistration> {
        let mut errors = FieldErrors::new();
        errors
            .require("name", self.name.as_deref(), "Name is required")
            .check(
                "email",
                self.email.as_deref().is_some_and(is_valid_email),
                "Please include a valid email",
            )
            .check(
                "password",
                self.password
                    .as_deref()
                    .is_some_and(|p| p.chars().count() >= MIN_PASSWORD_LENGTH),
                "Please enter a password with 6 or more characters",
            );
        errors.into_result()?;

        Ok(ValidRegistration {
            name: self.name.unwrap_or_default().trim().to_string(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        })
    }
}
