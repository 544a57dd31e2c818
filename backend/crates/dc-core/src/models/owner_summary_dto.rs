use crate::User;

use serde::{Deserialize, Serialize};

/// Name and avatar of a profile's owner, embedded in profile responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerSummaryDto {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl From<&User> for OwnerSummaryDto {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            avatar: u.avatar.clone(),
        }
    }
}
