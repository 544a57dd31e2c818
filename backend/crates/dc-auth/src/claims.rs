use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, iat: i64, ttl_secs: i64) -> Self {
        Self {
            sub: user_id.to_string(),
            exp: iat.saturating_add(ttl_secs),
            iat,
        }
    }

    /// Validate claims after JWT signature verification, returning the subject
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<Uuid> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (user_id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.exp < self.iat {
            return Err(AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "exp precedes iat".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Uuid::parse_str(&self.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("sub is not a user id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
