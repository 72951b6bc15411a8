//! Actor use cases.

use filmlib_core::error::CoreError;
use filmlib_core::types::DbId;
use filmlib_db::models::actor::{ActorWithFilms, CreateActor, UpdateActor};
use filmlib_db::repositories::ActorRepo;
use filmlib_db::{DbPool, RepoError};

use super::internal;

const ENTITY: &str = "Actor";

#[derive(Clone)]
pub struct ActorService {
    pool: DbPool,
}

impl ActorService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &CreateActor) -> Result<DbId, CoreError> {
        let id = ActorRepo::create(&self.pool, input)
            .await
            .map_err(|e| internal("create actor", e))?;
        tracing::info!(actor_id = id, name = %input.name, "Actor created");
        Ok(id)
    }

    pub async fn list(&self) -> Result<Vec<ActorWithFilms>, CoreError> {
        let actors = ActorRepo::list_with_films(&self.pool)
            .await
            .map_err(|e| internal("list actors", e))?;
        tracing::debug!(count = actors.len(), "Listed actors");
        Ok(actors)
    }

    /// Patch name and/or gender. Empty fields are ignored.
    pub async fn edit(&self, id: DbId, input: &UpdateActor) -> Result<(), CoreError> {
        ActorRepo::update(&self.pool, id, input)
            .await
            .map_err(|e| match e {
                RepoError::NotFound => CoreError::NotFound { entity: ENTITY, id },
                other => internal("edit actor", other),
            })?;
        tracing::info!(actor_id = id, "Actor updated");
        Ok(())
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        ActorRepo::delete(&self.pool, id)
            .await
            .map_err(|e| match e {
                RepoError::NotFound => CoreError::NotFound { entity: ENTITY, id },
                other => internal("delete actor", other),
            })?;
        tracing::info!(actor_id = id, "Actor deleted");
        Ok(())
    }
}
