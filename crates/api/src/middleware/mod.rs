//! Authentication and authorization middleware.
//!
//! - [`auth::require_bearer`] -- the access gate: verifies the bearer token
//!   and stores the verified [`auth::AuthUser`] in request extensions.
//! - [`auth::AuthUser`] -- extracts the verified user set by the gate.
//! - [`rbac::RequireAdmin`] -- requires the `admin` role.
//! - [`rbac::RequireAuth`] -- requires any verified role.

pub mod auth;
pub mod rbac;
