//! Profile aggregate - a user's public developer profile.
//!
//! The scalar fields, skills, social links and both subcollections form one
//! consistency unit; every mutation goes through the methods here so that
//! `updated_at` moves with it.

use crate::models::subcollection::{insert_head, remove_by_id};
use crate::{Education, Experience, NewEducation, NewExperience, ProfileFields, SocialLinks, parse_skills};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// One profile per user
    pub owner_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    /// Newest first
    pub experience: Vec<Experience>,
    /// Newest first
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Empty profile for `owner_id`
    pub fn new(owner_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            company: None,
            website: None,
            location: None,
            bio: None,
            status: None,
            github_username: None,
            skills: Vec::new(),
            social: SocialLinks::default(),
            experience: Vec::new(),
            education: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// New profile with `fields` applied; absent fields stay unset
    pub fn create(owner_id: Uuid, fields: ProfileFields) -> Self {
        let mut profile = Self::new(owner_id);
        profile.apply(fields);
        profile
    }

    /// Sparse update. Only fields present and non-empty in `fields` are
    /// written; social links merge one level deep.
    pub fn apply(&mut self, fields: ProfileFields) {
        let ProfileFields {
            company,
            website,
            location,
            bio,
            status,
            github_username,
            skills,
            social,
        } = fields;

        for (slot, value) in [
            (&mut self.company, company),
            (&mut self.website, website),
            (&mut self.location, location),
            (&mut self.bio, bio),
            (&mut self.status, status),
            (&mut self.github_username, github_username),
        ] {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                *slot = Some(v);
            }
        }

        if let Some(raw) = skills.filter(|s| !s.is_empty()) {
            self.skills = parse_skills(&raw);
        }

        self.social.merge(social);
        self.touch();
    }

    pub fn add_experience(&mut self, input: NewExperience) -> Uuid {
        let id = insert_head(&mut self.experience, Experience::new(input));
        self.touch();
        id
    }

    /// Returns false, leaving the profile untouched, when `id` is unknown
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        let removed = remove_by_id(&mut self.experience, id);
        if removed {
            self.touch();
        }
        removed
    }

    pub fn add_education(&mut self, input: NewEducation) -> Uuid {
        let id = insert_head(&mut self.education, Education::new(input));
        self.touch();
        id
    }

    pub fn remove_education(&mut self, id: Uuid) -> bool {
        let removed = remove_by_id(&mut self.education, id);
        if removed {
            self.touch();
        }
        removed
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
