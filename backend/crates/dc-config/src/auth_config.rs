use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS,
    MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

// Hand-written so the secret never reaches a log line
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set DC_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}
