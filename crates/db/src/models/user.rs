//! User entity model and DTOs.

use filmlib_core::roles::Role;
use filmlib_core::types::DbId;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password digest -- NEVER serialize this to API responses.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    /// Argon2id PHC string.
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Stored as text; see [`User::role`] for the parsed form.
    #[sqlx(rename = "role")]
    pub role_name: String,
}

impl User {
    /// Parse the stored role. The `ck_users_role` constraint keeps this
    /// from failing for rows written through [`crate::repositories::UserRepo`].
    pub fn role(&self) -> Result<Role, filmlib_core::roles::UnknownRole> {
        self.role_name.parse()
    }
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}
