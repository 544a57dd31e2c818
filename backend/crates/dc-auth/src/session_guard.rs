//! Resolves the `Authorization` header of a mutating request to a user id.

use crate::TokenCodec;

use uuid::Uuid;

pub const BEARER_PREFIX: &str = "Bearer ";

/// Why a request was refused at the session boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unauthenticated {
    /// No credential was presented
    NoToken,
    /// A credential was presented but is malformed, forged or expired
    InvalidToken,
}

impl Unauthenticated {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoToken => "NO_TOKEN",
            Self::InvalidToken => "INVALID_TOKEN",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::NoToken => "No token, authorization denied",
            Self::InvalidToken => "Token is not valid",
        }
    }
}

pub struct SessionGuard;

impl SessionGuard {
    pub fn authenticate(codec: &TokenCodec, header: Option<&str>) -> Result<Uuid, Unauthenticated> {
        let header = header.ok_or(Unauthenticated::NoToken)?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(Unauthenticated::InvalidToken)?;

        codec
            .verify(token)
            .map_err(|_| Unauthenticated::InvalidToken)
    }
}
