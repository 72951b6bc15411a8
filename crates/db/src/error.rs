//! Store-level error type.
//!
//! Repositories translate backend failure codes into these variants so the
//! service layer never inspects `sqlx` errors directly.

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// A lookup matched no row, or an update/delete affected zero rows.
    #[error("row not found")]
    NotFound,

    /// A unique constraint rejected the insert.
    #[error("row already exists")]
    AlreadyExists,

    /// A film referenced an actor name that is not in the `actors` table.
    #[error("unknown actor: {0}")]
    UnknownActor(String),

    /// Input failed validation before any statement was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Map an insert error, turning unique violations into [`RepoError::AlreadyExists`].
    pub(crate) fn from_insert(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return RepoError::AlreadyExists;
            }
        }
        RepoError::Database(err)
    }
}
