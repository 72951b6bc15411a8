//! Handlers for the `/auth` resource (sign-up, sign-in).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use filmlib_core::roles::Role;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::{CreatedId, DataResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for sign-up and sign-in.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Successful sign-in response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/sign-up
///
/// Register an account with the `user` role. Returns 201 with the new id.
pub async fn sign_up(
    State(state): State<AppState>,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedId>>)> {
    register(&state, input, Role::User).await
}

/// POST /api/v1/auth/admin/sign-up
///
/// Register an account with the `admin` role. Returns 201 with the new id.
pub async fn sign_up_admin(
    State(state): State<AppState>,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedId>>)> {
    register(&state, input, Role::Admin).await
}

/// POST /api/v1/auth/sign-in
///
/// Exchange username + password for an access token.
pub async fn sign_in(
    State(state): State<AppState>,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token = state.auth.sign_in(&input.username, &input.password).await?;
    Ok(Json(TokenResponse {
        token,
        expires_in: state.auth.token_ttl().num_seconds(),
    }))
}

async fn register(
    state: &AppState,
    input: CredentialsRequest,
    role: Role,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedId>>)> {
    let id = state
        .auth
        .register(&input.username, &input.password, role)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id },
        }),
    ))
}
