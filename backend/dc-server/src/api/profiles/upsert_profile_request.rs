use dc_core::{ProfileFields, SocialLinks};

use serde::Deserialize;

/// Sparse profile edit. Social links arrive flat, as the form sends them.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpsertProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "githubusername")]
    pub github_username: Option<String>,
    /// Comma-separated
    pub skills: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl UpsertProfileRequest {
    /// Whether status and skills are required depends on whether a profile
    /// exists, which only the store can decide.
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            company: self.company,
            website: self.website,
            location: self.location,
            bio: self.bio,
            status: self.status,
            github_username: self.github_username,
            skills: self.skills,
            social: SocialLinks {
                youtube: self.youtube,
                twitter: self.twitter,
                facebook: self.facebook,
                linkedin: self.linkedin,
                instagram: self.instagram,
            },
        }
    }
}
