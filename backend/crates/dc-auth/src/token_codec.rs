use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// A freshly signed session token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies HS256 session tokens.
///
/// Expiry is checked here rather than by `jsonwebtoken` so that verification
/// can be evaluated against an explicit clock: a token is valid strictly
/// before `exp`, with no leeway.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, user_id: Uuid) -> AuthErrorResult<IssuedToken> {
        self.issue_at(user_id, Utc::now())
    }

    #[track_caller]
    pub fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> AuthErrorResult<IssuedToken> {
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);
        let claims = Claims::new(user_id, now.timestamp(), ttl_secs);

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |source| AuthError::JwtEncode {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        let expires_at = Utc
            .timestamp_opt(claims.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature, claims and expiry, returning the subject
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Uuid> {
        self.verify_at(token, Utc::now())
    }

    #[track_caller]
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthErrorResult<Uuid> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(
            |source| AuthError::JwtDecode {
                source,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        let user_id = token_data.claims.validate()?;

        if now.timestamp() >= token_data.claims.exp {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(user_id)
    }
}
