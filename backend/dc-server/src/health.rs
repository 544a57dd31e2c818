use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use sqlx::SqlitePool;

/// GET /health - Component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database_ok = ping(&state.pool).await;

    let (status, label) = if database_ok {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let health = json!({
        "status": label,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unavailable" },
            "auth": "operational",
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can we reach the database?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if ping(&state.pool).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
    }
}

async fn ping(pool: &SqlitePool) -> bool {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => true,
        Err(e) => {
            log::error!("Database ping failed: {}", e);
            false
        }
    }
}
