use dc_auth::IssuedToken;

use serde::Serialize;

/// Returned by register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    /// Unix seconds
    pub expires_at: i64,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires_at: issued.expires_at.timestamp(),
        }
    }
}
