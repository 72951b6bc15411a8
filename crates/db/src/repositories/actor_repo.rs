//! Repository for the `actors` table and the actor side of `films_actors`.

use filmlib_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::actor::{Actor, ActorWithFilms, CreateActor, UpdateActor};

/// Column list for the `actors` table.
const COLUMNS: &str = "id, name, gender, birthday";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning its id.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<DbId, RepoError> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO actors (name, gender, birthday) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.gender)
        .bind(input.birthday)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// List every actor with the names of the films it appears in.
    pub async fn list_with_films(pool: &PgPool) -> Result<Vec<ActorWithFilms>, RepoError> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY id");
        let actors = sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await?;

        let mut result = Vec::with_capacity(actors.len());
        for actor in actors {
            let films = Self::film_names(pool, actor.id).await?;
            result.push(ActorWithFilms { actor, films });
        }
        Ok(result)
    }

    /// Patch an actor's name and/or gender.
    ///
    /// Absent or empty fields keep their stored value. Fails with
    /// [`RepoError::NotFound`] when no actor has `id`, including the case
    /// where no field was supplied.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateActor) -> Result<(), RepoError> {
        let result = sqlx::query(
            "UPDATE actors SET
                name = COALESCE(NULLIF($2, ''), name),
                gender = COALESCE(NULLIF($3, ''), gender)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.name.as_deref())
        .bind(input.gender.as_deref())
        .execute(pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    /// Delete an actor. Its association rows go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    /// Names of the films associated with an actor, in film id order.
    pub async fn film_names(pool: &PgPool, actor_id: DbId) -> Result<Vec<String>, RepoError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT f.name FROM films f
             JOIN films_actors fa ON fa.film_id = f.id
             WHERE fa.actor_id = $1
             ORDER BY f.id",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await?;
        Ok(names)
    }
}
