//! Profile REST API handlers
//!
//! Reads are public; every edit is scoped to the authenticated caller's own
//! aggregate and answers with the full aggregate as stored.

use crate::{
    ApiError, ApiResult, AppState, AuthUser, DeleteResponse, EducationRequest, ExperienceRequest,
    ProfileListResponse, ProfileResponse, UpsertProfileRequest,
};

use dc_core::{OwnerSummaryDto, Profile, ProfileDto, parse_id};
use dc_db::UserRepository;

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::{debug, info};

/// GET /api/v1/profiles/me
pub async fn get_my_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state.profiles.get_by_owner(user_id).await?;
    respond(&state, profile).await
}

/// POST /api/v1/profiles
///
/// Create the caller's profile or merge the supplied fields into it
pub async fn upsert_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<UpsertProfileRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileResponse>> {
    let Json(req) = payload?;

    let profile = state.profiles.upsert(user_id, req.into_fields()).await?;
    info!("Saved profile {} for user {}", profile.id, user_id);

    respond(&state, profile).await
}

/// GET /api/v1/profiles
pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Json<ProfileListResponse>> {
    let profiles = state.profiles.list_all().await?;

    let owner_ids: Vec<_> = profiles.iter().map(|p| p.owner_id).collect();
    let mut owners: HashMap<_, _> = UserRepository::find_by_ids(&state.pool, &owner_ids)
        .await?
        .into_iter()
        .map(|user| (user.id, OwnerSummaryDto::from(&user)))
        .collect();

    let profiles = profiles
        .into_iter()
        .filter_map(|profile| {
            let owner = owners.remove(&profile.owner_id);
            if owner.is_none() {
                debug!("Skipping profile {} without an owner", profile.id);
            }
            owner.map(|owner| ProfileDto::new(profile, owner))
        })
        .collect();

    Ok(Json(ProfileListResponse { profiles }))
}

/// GET /api/v1/profiles/by-owner/{owner_id}
pub async fn get_profile_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    // A malformed identifier cannot name a profile
    let owner_id = parse_id(&owner_id).map_err(|_| ApiError::profile_not_found())?;

    let profile = state.profiles.get_by_identifier(owner_id).await?;
    respond(&state, profile).await
}

/// DELETE /api/v1/profiles
///
/// Remove the caller's profile and account
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<DeleteResponse>> {
    state.profiles.delete_owner(user_id).await?;
    info!("Deleted account {}", user_id);

    Ok(Json(DeleteResponse {
        deleted_id: user_id.to_string(),
    }))
}

/// PUT /api/v1/profiles/experience
pub async fn add_experience(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<ExperienceRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileResponse>> {
    let Json(req) = payload?;
    let entry = req.validate()?;

    let profile = state.profiles.add_experience(user_id, entry).await?;
    info!("Added experience to profile {}", profile.id);

    respond(&state, profile).await
}

/// DELETE /api/v1/profiles/experience/{id}
pub async fn delete_experience(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(entry_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let entry_id = parse_id(&entry_id)?;

    let profile = state.profiles.remove_experience(user_id, entry_id).await?;
    info!("Removed experience {} from profile {}", entry_id, profile.id);

    respond(&state, profile).await
}

/// PUT /api/v1/profiles/education
pub async fn add_education(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: Result<Json<EducationRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileResponse>> {
    let Json(req) = payload?;
    let entry = req.validate()?;

    let profile = state.profiles.add_education(user_id, entry).await?;
    info!("Added education to profile {}", profile.id);

    respond(&state, profile).await
}

/// DELETE /api/v1/profiles/education/{id}
pub async fn delete_education(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(entry_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let entry_id = parse_id(&entry_id)?;

    let profile = state.profiles.remove_education(user_id, entry_id).await?;
    info!("Removed education {} from profile {}", entry_id, profile.id);

    respond(&state, profile).await
}

/// Attach the owner summary and wrap the aggregate for the wire
async fn respond(state: &AppState, profile: Profile) -> ApiResult<Json<ProfileResponse>> {
    let owner = UserRepository::find_by_id(&state.pool, profile.owner_id)
        .await?
        .ok_or_else(ApiError::profile_not_found)?;

    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(profile, OwnerSummaryDto::from(&owner)),
    }))
}
