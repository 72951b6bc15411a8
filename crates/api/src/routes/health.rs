//! Liveness probe, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Open connections in the pool, idle or not.
    pub db_connections: u32,
}

/// GET /health
///
/// Always 200 so the process itself reads as alive; database reachability
/// is reported in the body. Needs no token.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match filmlib_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check: database unreachable");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        db_connections: state.pool.size(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
