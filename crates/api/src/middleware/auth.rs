//! Bearer-token access gate and the extractor handlers use to read its result.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use filmlib_core::error::CoreError;
use filmlib_core::roles::Role;

use crate::error::AppError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Why the gate refused a request. Both map to 401.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GateError {
    #[error("invalid auth header")]
    InvalidAuthHeader,

    #[error("cannot parse token")]
    CannotParseToken,
}

impl From<GateError> for AppError {
    fn from(err: GateError) -> Self {
        AppError::Core(CoreError::Unauthorized(err.to_string()))
    }
}

/// The verified caller, placed in request extensions by [`require_bearer`].
///
/// The role comes only from a verified token; no request header is ever
/// read back as a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub role: Role,
}

/// Access gate for protected routes.
///
/// Fails closed with 401 when the `Authorization` header is missing or not
/// `Bearer <token>` (prefix matched case-insensitively), or when the token
/// does not verify. On success the verified [`AuthUser`] is inserted into the
/// request extensions and the inner handler runs.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let role = {
        let token = bearer_token(req.headers()).ok_or_else(|| {
            tracing::warn!(path = %req.uri().path(), "Rejected request: invalid auth header");
            GateError::InvalidAuthHeader
        })?;

        state.auth.verify(token).map_err(|e| {
            tracing::warn!(path = %req.uri().path(), error = %e, "Rejected request: bad token");
            GateError::CannotParseToken
        })?
    };

    req.extensions_mut().insert(AuthUser { role });
    Ok(next.run(req).await)
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let prefix = value.get(..BEARER_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(BEARER_PREFIX) {
        return None;
    }
    let token = &value[BEARER_PREFIX.len()..];
    if token.is_empty() {
        return None;
    }
    Some(token)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    /// Fails closed when the route was not wrapped by [`require_bearer`].
    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .copied()
            .ok_or_else(|| GateError::InvalidAuthHeader.into())
    }
}
