pub mod actor;
pub mod auth;
pub mod film;
pub mod health;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::middleware::auth::require_bearer;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/sign-up                    register as user (public)
/// /auth/admin/sign-up              register as admin (public)
/// /auth/sign-in                    issue token (public)
///
/// /actors                          list (any role), create (admin)
/// /actors/{id}                     edit, delete (admin)
///
/// /films?sort=                     sorted list (any role)
/// /films                           create (admin)
/// /films/search?by=&q=             substring search (any role)
/// /films/{id}                      delete (admin)
/// ```
///
/// Everything except `/auth` sits behind the bearer-token access gate.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/actors", actor::router())
        .nest("/films", film::router())
        .route_layer(from_fn_with_state(state.clone(), require_bearer));

    Router::new()
        .nest("/auth", auth::router())
        .merge(protected)
}
