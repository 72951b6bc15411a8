//! Handlers for the `/actors` resource.
//!
//! Reads are open to any verified role; mutations require `admin`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use filmlib_core::types::DbId;
use filmlib_db::models::actor::{ActorWithFilms, CreateActor, UpdateActor};

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::{CreatedId, DataResponse};
use crate::state::AppState;

/// GET /api/v1/actors
pub async fn list_actors(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<DataResponse<Vec<ActorWithFilms>>>> {
    let actors = state.actors.list().await?;
    Ok(Json(DataResponse { data: actors }))
}

/// POST /api/v1/actors
pub async fn create_actor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppJson(input): AppJson<CreateActor>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedId>>)> {
    let id = state.actors.create(&input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id },
        }),
    ))
}

/// PATCH /api/v1/actors/{id}
///
/// Only `name` and `gender` can change; absent or empty fields are kept.
pub async fn edit_actor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateActor>,
) -> AppResult<StatusCode> {
    state.actors.edit(id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/actors/{id}
pub async fn delete_actor(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    state.actors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
