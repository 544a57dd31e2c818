use crate::{Education, Experience, OwnerSummaryDto, Profile, SocialLinks};

use serde::{Deserialize, Serialize};

/// Profile DTO for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub id: String,
    pub owner: OwnerSummaryDto,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ProfileDto {
    pub fn new(p: Profile, owner: OwnerSummaryDto) -> Self {
        Self {
            id: p.id.to_string(),
            owner,
            company: p.company,
            website: p.website,
            location: p.location,
            bio: p.bio,
            status: p.status,
            github_username: p.github_username,
            skills: p.skills,
            social: p.social,
            experience: p.experience,
            education: p.education,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
