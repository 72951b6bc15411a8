//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /sign-up        -> sign_up
/// POST /admin/sign-up  -> sign_up_admin
/// POST /sign-in        -> sign_in
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(auth::sign_up))
        .route("/admin/sign-up", post(auth::sign_up_admin))
        .route("/sign-in", post(auth::sign_in))
}
