use crate::{FieldErrors, Result as CoreErrorResult, SocialLinks};

/// Sparse profile patch. `None` and empty strings mean "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub github_username: Option<String>,
    /// Comma-separated, as typed by the user
    pub skills: Option<String>,
    pub social: SocialLinks,
}

impl ProfileFields {
    /// A first save must carry status and skills; later edits may omit them
    pub fn check_creatable(&self) -> CoreErrorResult<()> {
        let mut errors = FieldErrors::new();
        errors
            .require("status", self.status.as_deref(), "Status is required")
            .require("skills", self.skills.as_deref(), "Skills is required");
        errors.into_result()
    }
}

/// Split a comma-separated skill list, trimming each element and dropping empties
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
