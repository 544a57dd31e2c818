//! Request bodies sent by the client. Absent fields are omitted from the JSON
//! so the server leaves them untouched.

use serde::Serialize;

/// Sparse profile edit; `skills` is comma-separated
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// New experience entry; dates are `YYYY-MM-DD`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExperienceForm {
    pub title: String,
    pub organization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// New education entry; dates are `YYYY-MM-DD`
#[derive(Debug, Clone, Default, Serialize)]
pub struct EducationForm {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub is_current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
