use crate::Entry;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A past or current position held by the profile owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

/// Validated input for a new experience entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperience {
    pub title: String,
    pub organization: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

impl Experience {
    pub fn new(input: NewExperience) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            organization: input.organization,
            location: input.location,
            from: input.from,
            to: input.to,
            is_current: input.is_current,
            description: input.description,
        }
    }
}

impl Entry for Experience {
    fn id(&self) -> Uuid {
        self.id
    }
}
