//! Route definitions for the `/films` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::film;
use crate::state::AppState;

/// Routes mounted at `/films`.
///
/// ```text
/// GET    /         -> list_films
/// POST   /         -> create_film
/// GET    /search   -> search_films
/// DELETE /{id}     -> delete_film
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(film::list_films).post(film::create_film))
        .route("/search", get(film::search_films))
        .route("/{id}", delete(film::delete_film))
}
