use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use filmlib_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `filmlib_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body, query string, or path segment could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        self.parts().0
    }

    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } | CoreError::NotFoundByName { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core_message(core))
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::InvalidSortField(field) => (
                    StatusCode::BAD_REQUEST,
                    "INVALID_SORT_FIELD",
                    format!("invalid sort field '{field}'"),
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                // A valid token with the wrong role is a client error, not an
                // authentication failure.
                CoreError::Forbidden(msg) => {
                    (StatusCode::BAD_REQUEST, "INSUFFICIENT_ROLE", msg.clone())
                }
                CoreError::Internal(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                ),
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        }
    }
}

fn core_message(core: &CoreError) -> String {
    match core {
        CoreError::NotFound { entity, id } => format!("{entity} with id {id} not found"),
        CoreError::NotFoundByName { entity, name } => format!("{entity} '{name}' not found"),
        other => other.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Core(CoreError::Internal(msg)) = &self {
            tracing::error!(error = %msg, "Internal error");
        }

        let (status, code, message) = self.parts();
        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("invalid query string: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("invalid path: {}", rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: CoreError) -> StatusCode {
        AppError::Core(err).status()
    }

    #[test]
    fn domain_errors_map_to_stable_statuses() {
        assert_eq!(
            status_of(CoreError::NotFound { entity: "Actor", id: 1 }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(CoreError::NotFoundByName {
                entity: "Actor",
                name: "Nobody".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(CoreError::Validation("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(CoreError::InvalidSortField("bogus".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(CoreError::Forbidden("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(CoreError::Conflict("x".into())), StatusCode::CONFLICT);
        assert_eq!(status_of(CoreError::Unauthorized("x".into())), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(CoreError::Internal("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_exposed() {
        let err = AppError::Core(CoreError::Internal("connection reset by peer".into()));
        let (_, code, message) = err.parts();
        assert_eq!(code, "INTERNAL_ERROR");
        assert!(!message.contains("connection reset"));
    }
}
