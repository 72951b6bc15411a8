//! Handlers for the `/films` resource.
//!
//! There is deliberately no edit endpoint: films are created and deleted.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use filmlib_core::catalog::FilmSearchKind;
use filmlib_core::types::DbId;
use filmlib_db::models::film::{CreateFilm, FilmWithActors};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::{SearchParams, SortParams};
use crate::response::{CreatedId, DataResponse};
use crate::state::AppState;

/// GET /api/v1/films?sort=<rating|name|created_at>
pub async fn list_films(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    AppQuery(params): AppQuery<SortParams>,
) -> AppResult<Json<DataResponse<Vec<FilmWithActors>>>> {
    let films = state.films.list_sorted(&params.sort).await?;
    Ok(Json(DataResponse { data: films }))
}

/// GET /api/v1/films/search?by=<name|actor>&q=<substring>
pub async fn search_films(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    AppQuery(params): AppQuery<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<FilmWithActors>>>> {
    let kind: FilmSearchKind = params.by.parse()?;
    let films = state.films.search(kind, &params.q).await?;
    Ok(Json(DataResponse { data: films }))
}

/// POST /api/v1/films
pub async fn create_film(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppJson(input): AppJson<CreateFilm>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedId>>)> {
    let id = state.films.create(&input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id },
        }),
    ))
}

/// DELETE /api/v1/films/{id}
pub async fn delete_film(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.films.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
