//! Registration and sign-in.

use filmlib_core::error::CoreError;
use filmlib_core::roles::Role;
use filmlib_core::types::DbId;
use filmlib_db::models::user::CreateUser;
use filmlib_db::repositories::UserRepo;
use filmlib_db::{DbPool, RepoError};

use super::internal;
use crate::auth::jwt::{issue_access_token, verify_token, JwtConfig, TokenError};
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};

/// Message for every sign-in failure, so callers cannot tell which part
/// of the credentials was wrong.
const BAD_CREDENTIALS: &str = "Invalid username or password";

/// Composes the password hasher, the user store and the token codec.
#[derive(Clone)]
pub struct AuthService {
    pool: DbPool,
    jwt: JwtConfig,
}

impl AuthService {
    pub fn new(pool: DbPool, jwt: JwtConfig) -> Self {
        Self { pool, jwt }
    }

    /// Lifetime of tokens returned by [`AuthService::sign_in`].
    pub fn token_ttl(&self) -> chrono::Duration {
        self.jwt.token_ttl
    }

    /// Create an account and return its id.
    ///
    /// Fails with [`CoreError::Conflict`] if the username is taken.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<DbId, CoreError> {
        if username.trim().is_empty() {
            return Err(CoreError::Validation("username must not be empty".into()));
        }
        validate_password_strength(password, MIN_PASSWORD_LENGTH).map_err(CoreError::Validation)?;

        let password = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| CoreError::Internal(format!("password hashing task failed: {e}")))?
            .map_err(|e| CoreError::Internal(format!("password hashing error: {e}")))?;

        let input = CreateUser {
            username: username.to_string(),
            password_hash,
            role,
        };
        let id = UserRepo::create(&self.pool, &input).await.map_err(|e| match e {
            RepoError::AlreadyExists => {
                CoreError::Conflict(format!("user '{username}' already exists"))
            }
            other => internal("create user", other),
        })?;

        tracing::info!(user_id = id, %role, "User registered");
        Ok(id)
    }

    /// Check credentials and issue an access token carrying the user's role.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<String, CoreError> {
        let user = match UserRepo::get_by_username(&self.pool, username).await {
            Ok(user) => user,
            Err(RepoError::NotFound) => {
                tracing::debug!(username, "Sign-in for unknown user");
                return Err(CoreError::Unauthorized(BAD_CREDENTIALS.into()));
            }
            Err(e) => return Err(internal("find user", e)),
        };

        let password = password.to_owned();
        let digest = user.password_hash.clone();
        let valid = tokio::task::spawn_blocking(move || verify_password(&password, &digest))
            .await
            .map_err(|e| CoreError::Internal(format!("password verification task failed: {e}")))?
            .map_err(|e| CoreError::Internal(format!("password verification error: {e}")))?;

        if !valid {
            tracing::debug!(user_id = user.id, "Sign-in with wrong password");
            return Err(CoreError::Unauthorized(BAD_CREDENTIALS.into()));
        }

        let role = user
            .role()
            .map_err(|e| CoreError::Internal(format!("stored role for user {}: {e}", user.id)))?;
        let token = issue_access_token(role, &self.jwt)
            .map_err(|e| CoreError::Internal(format!("token issuance: {e}")))?;

        tracing::info!(user_id = user.id, %role, "User signed in");
        Ok(token)
    }

    /// Verify a bearer token and return its role claim.
    pub fn verify(&self, token: &str) -> Result<Role, TokenError> {
        verify_token(token, &self.jwt)
    }
}
