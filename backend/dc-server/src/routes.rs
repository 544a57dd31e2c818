use crate::{
    AppState, add_education, add_experience, delete_account, delete_education, delete_experience,
    get_github_repos, get_my_profile, get_profile_by_owner, get_session, health, list_profiles,
    login, register, upsert_profile,
};

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Identity and session
        .route("/identities", post(register))
        .route("/session", get(get_session).post(login))
        // Profiles
        .route(
            "/profiles",
            get(list_profiles).post(upsert_profile).delete(delete_account),
        )
        .route("/profiles/me", get(get_my_profile))
        .route("/profiles/by-owner/{owner_id}", get(get_profile_by_owner))
        .route("/profiles/experience", put(add_experience))
        .route("/profiles/experience/{id}", delete(delete_experience))
        .route("/profiles/education", put(add_education))
        .route("/profiles/education/{id}", delete(delete_education))
        .route("/profiles/github/{handle}", get(get_github_repos));

    Router::new()
        .nest("/api/v1", api)
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // Browser front-ends are served from a different origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
