use dc_core::{FieldErrors, NewEducation, Result as CoreErrorResult};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    #[serde(alias = "fieldofstudy")]
    pub field_of_study: Option<String>,
    /// YYYY-MM-DD
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(alias = "current")]
    pub is_current: bool,
    pub description: Option<String>,
}

impl EducationRequest {
    pub fn validate(self) -> CoreErrorResult<NewEducation> {
        let mut errors = FieldErrors::new();
        errors
            .require("school", self.school.as_deref(), "School is required")
            .require("degree", self.degree.as_deref(), "Degree is required")
            .require(
                "field_of_study",
                self.field_of_study.as_deref(),
                "Field of study is required",
            )
            .require("from", self.from.as_deref(), "From date is required");
        let from = errors.date("from", self.from.as_deref());
        let to = errors.date("to", self.to.as_deref());
        errors.into_result()?;

        Ok(NewEducation {
            school: self.school.unwrap_or_default(),
            degree: self.degree.unwrap_or_default(),
            field_of_study: self.field_of_study.unwrap_or_default(),
            from: from.unwrap_or_default(),
            to,
            is_current: self.is_current,
            description: self.description.filter(|d| !d.is_empty()),
        })
    }
}
