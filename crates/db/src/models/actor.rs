//! Actor entity model and DTOs.

use filmlib_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `actors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub name: String,
    pub gender: String,
    pub birthday: Date,
}

/// An actor enriched with the names of the films it appears in.
///
/// `films` is computed from `films_actors` at read time; it is not stored.
#[derive(Debug, Clone, Serialize)]
pub struct ActorWithFilms {
    #[serde(flatten)]
    pub actor: Actor,
    pub films: Vec<String>,
}

/// DTO for creating a new actor. The id is assigned by the database.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateActor {
    pub name: String,
    pub gender: String,
    pub birthday: Date,
}

/// DTO for patching an actor.
///
/// A field that is absent or empty leaves the stored value unchanged.
/// Birthday and film associations cannot be changed through this path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateActor {
    pub name: Option<String>,
    pub gender: Option<String>,
}
