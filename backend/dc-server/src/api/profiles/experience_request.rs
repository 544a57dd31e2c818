use dc_core::{FieldErrors, NewExperience, Result as CoreErrorResult};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: Option<String>,
    #[serde(alias = "company")]
    pub organization: Option<String>,
    pub location: Option<String>,
    /// YYYY-MM-DD
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(alias = "current")]
    pub is_current: bool,
    pub description: Option<String>,
}

impl ExperienceRequest {
    pub fn validate(self) -> CoreErrorResult<NewExperience> {
        let mut errors = FieldErrors::new();
        errors
            .require("title", self.title.as_deref(), "Title is required")
            .require(
                "organization",
                self.organization.as_deref(),
                "Organization is required",
            )
            .require("from", self.from.as_deref(), "From date is required");
        let from = errors.date("from", self.from.as_deref());
        let to = errors.date("to", self.to.as_deref());
        errors.into_result()?;

        Ok(NewExperience {
            title: self.title.unwrap_or_default(),
            organization: self.organization.unwrap_or_default(),
            location: self.location.filter(|l| !l.is_empty()),
            from: from.unwrap_or_default(),
            to,
            is_current: self.is_current,
            description: self.description.filter(|d| !d.is_empty()),
        })
    }
}
