//! Film entity model and DTOs.
//!
//! Films have no update DTO: once created a film can only be deleted.

use filmlib_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `films` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Date,
    pub rating: i32,
}

/// A film enriched with the names of its actors (from `films_actors`).
#[derive(Debug, Clone, Serialize)]
pub struct FilmWithActors {
    #[serde(flatten)]
    pub film: Film,
    pub actors: Vec<String>,
}

/// DTO for creating a film together with its actor associations.
///
/// Every name in `actors` must already exist in the `actors` table; actors
/// are never created implicitly. Bounds mirror the constants in
/// [`filmlib_core::catalog`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFilm {
    #[validate(length(min = 1, max = 150, message = "must be 1 to 150 characters"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1000, message = "must be at most 1000 characters"))]
    pub description: String,
    pub created_at: Date,
    #[validate(range(min = 0, max = 10, message = "must be between 0 and 10"))]
    pub rating: i32,
    #[serde(default)]
    pub actors: Vec<String>,
}
