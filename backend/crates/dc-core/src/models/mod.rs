pub mod education;
pub mod experience;
pub mod owner_summary_dto;
pub mod profile;
pub mod profile_dto;
pub mod profile_fields;
pub mod repo_summary;
pub mod social_links;
pub mod subcollection;
pub mod user;
pub mod user_dto;
