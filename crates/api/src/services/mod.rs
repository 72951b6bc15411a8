//! Use-case orchestration between the HTTP layer and the stores.
//!
//! Services own cheap clones of the pool (and, for auth, the signing
//! config). They translate [`RepoError`] into [`CoreError`] so nothing
//! backend-specific reaches a handler.

pub mod actor;
pub mod auth;
pub mod film;

pub use actor::ActorService;
pub use auth::AuthService;
pub use film::FilmService;

use filmlib_core::error::CoreError;
use filmlib_db::RepoError;

/// Wrap an unexpected store failure. The message is logged by the HTTP
/// layer and never sent to the client.
fn internal(context: &'static str, err: RepoError) -> CoreError {
    CoreError::Internal(format!("{context}: {err}"))
}
