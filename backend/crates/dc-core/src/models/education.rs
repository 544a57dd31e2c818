use crate::Entry;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A school attended by the profile owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEducation {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

impl Education {
    pub fn new(input: NewEducation) -> Self {
        Self {
            id: Uuid::new_v4(),
            school: input.school,
            degree: input.degree,
            field_of_study: input.field_of_study,
            from: input.from,
            to: input.to,
            is_current: input.is_current,
            description: input.description,
        }
    }
}

impl Entry for Education {
    fn id(&self) -> Uuid {
        self.id
    }
}
