//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! meet the minimum requirement. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use filmlib_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;

/// Requires the `admin` role. Rejects with 400 otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug)]
pub struct RequireAdmin(pub AuthUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.role.is_admin() {
            tracing::warn!(role = %user.role, path = %parts.uri.path(), "Admin role required");
            return Err(AppError::Core(CoreError::Forbidden(
                "you do not have the necessary rights".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires any verified user (`admin` or `user`).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// handlers where the intent "any signed-in account may call this" should be
/// self-documenting.
#[derive(Debug)]
pub struct RequireAuth(pub AuthUser);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
