//! User identity - created at registration, immutable afterwards.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use uuid::Uuid;

const GRAVATAR_BASE: &str = "https://www.gravatar.com/avatar";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Stored lower-cased and trimmed
    pub email: String,
    /// argon2 PHC string, never leaves the server
    pub password_hash: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: &str, password_hash: String) -> Self {
        let email = normalize_email(email);
        Self {
            id: Uuid::new_v4(),
            name,
            avatar: gravatar_url(&email),
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Gravatar image for an address: rated PG, 200px, mystery-man fallback
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(normalize_email(email).as_bytes());
    format!("{}/{}?s=200&r=pg&d=mm", GRAVATAR_BASE, hex::encode(digest))
}
