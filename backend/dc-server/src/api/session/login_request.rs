use dc_core::{FieldErrors, Result as CoreErrorResult, is_valid_email};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns (email, password) once both are present
    pub fn validate(self) -> CoreErrorResult<(String, String)> {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "email",
                self.email.as_deref().is_some_and(is_valid_email),
                "Please include a valid email",
            )
            .require("password", self.password.as_deref(), "Password is required");
        errors.into_result()?;

        Ok((
            self.email.unwrap_or_default(),
            self.password.unwrap_or_default(),
        ))
    }
}
