//! Repository for the `users` table.
//!
//! Users are insert-only: there is no update or delete path.

use filmlib_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password, role";

/// Provides create and lookup operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning its id.
    ///
    /// Fails with [`RepoError::AlreadyExists`] when the username is taken
    /// (`uq_users_username`); no second row is written.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<DbId, RepoError> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO users (username, password, role)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.username)
        .bind(&input.password_hash)
        .bind(input.role.as_str())
        .fetch_one(pool)
        .await
        .map_err(RepoError::from_insert)?;
        Ok(id)
    }

    /// Find a user by username (case-sensitive).
    ///
    /// The caller compares the stored digest; salts are per user so the
    /// comparison cannot happen in SQL.
    pub async fn get_by_username(pool: &PgPool, username: &str) -> Result<User, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await?
            .ok_or(RepoError::NotFound)
    }
}
