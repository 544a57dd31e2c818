pub mod api;
pub mod app_state;
pub mod error;
pub mod github_client;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    github::{github::get_github_repos, repo_list_response::RepoListResponse},
    identities::{
        identities::register,
        register_request::{RegisterRequest, ValidRegistration},
    },
    profiles::{
        delete_response::DeleteResponse,
        education_request::EducationRequest,
        experience_request::ExperienceRequest,
        profile_list_response::ProfileListResponse,
        profile_response::ProfileResponse,
        profiles::{
            add_education, add_experience, delete_account, delete_education, delete_experience,
            get_my_profile, get_profile_by_owner, list_profiles, upsert_profile,
        },
        upsert_profile_request::UpsertProfileRequest,
    },
    session::{
        login_request::LoginRequest,
        session::{get_session, login},
        session_response::SessionResponse,
        token_response::TokenResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use github_client::{GithubClient, GithubError};

pub use crate::routes::build_router;
