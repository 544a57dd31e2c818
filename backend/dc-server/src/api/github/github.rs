//! GitHub passthrough handler

use crate::{ApiError, ApiResult, AppState, RepoListResponse};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use log::warn;

/// GET /api/v1/profiles/github/{handle}
///
/// The caller only learns that no repositories could be fetched; the cause
/// stays in the server log.
pub async fn get_github_repos(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> ApiResult<Json<RepoListResponse>> {
    match state.github.list_repos(&handle).await {
        Ok(repos) => Ok(Json(RepoListResponse { repos })),
        Err(e) => {
            warn!("GitHub lookup for '{}' failed: {}", handle, e);
            Err(ApiError::UpstreamUnavailable {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}
