//! Film use cases.

use filmlib_core::catalog::{FilmSearchKind, FilmSortField};
use filmlib_core::error::CoreError;
use filmlib_core::types::DbId;
use filmlib_db::models::film::{CreateFilm, FilmWithActors};
use filmlib_db::repositories::FilmRepo;
use filmlib_db::{DbPool, RepoError};
use validator::Validate;

use super::internal;

const ENTITY: &str = "Film";

#[derive(Clone)]
pub struct FilmService {
    pool: DbPool,
}

impl FilmService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Validate and insert a film with its actor links.
    ///
    /// Unknown actor names fail with [`CoreError::NotFoundByName`] and leave
    /// nothing behind.
    pub async fn create(&self, input: &CreateFilm) -> Result<DbId, CoreError> {
        input.validate()?;

        let id = FilmRepo::create(&self.pool, input)
            .await
            .map_err(|e| match e {
                RepoError::UnknownActor(name) => CoreError::NotFoundByName {
                    entity: "Actor",
                    name,
                },
                RepoError::Validation(errors) => CoreError::from(errors),
                other => internal("create film", other),
            })?;

        tracing::info!(
            film_id = id,
            name = %input.name,
            actors = input.actors.len(),
            "Film created"
        );
        Ok(id)
    }

    /// List all films ordered by `sort_key` (`rating`, `name` or `created_at`).
    pub async fn list_sorted(&self, sort_key: &str) -> Result<Vec<FilmWithActors>, CoreError> {
        let sort: FilmSortField = sort_key.parse()?;
        let films = FilmRepo::list_sorted(&self.pool, sort)
            .await
            .map_err(|e| internal("list films", e))?;
        tracing::debug!(count = films.len(), sort = sort.column(), "Listed films");
        Ok(films)
    }

    pub async fn search(
        &self,
        kind: FilmSearchKind,
        name_part: &str,
    ) -> Result<Vec<FilmWithActors>, CoreError> {
        let films = FilmRepo::search(&self.pool, kind, name_part)
            .await
            .map_err(|e| internal("search films", e))?;
        tracing::debug!(?kind, name_part, count = films.len(), "Searched films");
        Ok(films)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        FilmRepo::delete(&self.pool, id)
            .await
            .map_err(|e| match e {
                RepoError::NotFound => CoreError::NotFound { entity: ENTITY, id },
                other => internal("delete film", other),
            })?;
        tracing::info!(film_id = id, "Film deleted");
        Ok(())
    }
}
