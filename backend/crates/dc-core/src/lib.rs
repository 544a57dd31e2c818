pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::education::{Education, NewEducation};
pub use models::experience::{Experience, NewExperience};
pub use models::owner_summary_dto::OwnerSummaryDto;
pub use models::profile::Profile;
pub use models::profile_dto::ProfileDto;
pub use models::profile_fields::{ProfileFields, parse_skills};
pub use models::repo_summary::RepoSummary;
pub use models::social_links::SocialLinks;
pub use models::subcollection::Entry;
pub use models::user::{User, gravatar_url, normalize_email};
pub use models::user_dto::UserDto;
pub use validation::{DATE_FORMAT, FieldError, FieldErrors, is_valid_email, parse_id};

#[cfg(test)]
mod tests;
