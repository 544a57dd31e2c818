use crate::User;

use serde::{Deserialize, Serialize};

/// Public form of a user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name,
            email: u.email,
            avatar: u.avatar,
            created_at: u.created_at.timestamp(),
        }
    }
}
