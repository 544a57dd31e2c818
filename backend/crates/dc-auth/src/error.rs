use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::PasswordHash { .. } => "PASSWORD_HASH_FAILED",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
