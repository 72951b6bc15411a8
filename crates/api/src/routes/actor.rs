//! Route definitions for the `/actors` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::actor;
use crate::state::AppState;

/// Routes mounted at `/actors`.
///
/// ```text
/// GET    /       -> list_actors
/// POST   /       -> create_actor
/// PATCH  /{id}   -> edit_actor
/// DELETE /{id}   -> delete_actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(actor::list_actors).post(actor::create_actor))
        .route(
            "/{id}",
            patch(actor::edit_actor).delete(actor::delete_actor),
        )
}
