//! Repository for the `films` table and the `films_actors` junction.

use filmlib_core::catalog::{contains_pattern, FilmSearchKind, FilmSortField};
use filmlib_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};
use validator::Validate;

use crate::error::RepoError;
use crate::models::film::{CreateFilm, Film, FilmWithActors};

/// Column list for the `films` table.
const COLUMNS: &str = "id, name, description, created_at, rating";

/// Same columns, qualified for queries that join `films f`.
const QUALIFIED_COLUMNS: &str = "f.id, f.name, f.description, f.created_at, f.rating";

/// Provides create, search, list and delete operations for films.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a film and link it to each named actor, atomically.
    ///
    /// The input is validated before any statement runs. Duplicate names in
    /// `input.actors` are linked once. If any name is unknown the whole
    /// transaction is rolled back with [`RepoError::UnknownActor`], so no
    /// film row is ever visible without its full set of associations.
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> Result<DbId, RepoError> {
        input.validate()?;

        let mut tx = pool.begin().await?;

        let (film_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO films (name, description, created_at, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.created_at)
        .bind(input.rating)
        .fetch_one(&mut *tx)
        .await?;

        let mut seen: Vec<&str> = Vec::with_capacity(input.actors.len());
        for name in &input.actors {
            if seen.contains(&name.as_str()) {
                continue;
            }
            seen.push(name);

            let actor_id = Self::actor_id_by_name(&mut tx, name)
                .await?
                .ok_or_else(|| RepoError::UnknownActor(name.clone()))?;

            sqlx::query("INSERT INTO films_actors (film_id, actor_id) VALUES ($1, $2)")
                .bind(film_id)
                .bind(actor_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(film_id)
    }

    /// List all films ordered ascending by `sort`, with their actors.
    pub async fn list_sorted(
        pool: &PgPool,
        sort: FilmSortField,
    ) -> Result<Vec<FilmWithActors>, RepoError> {
        // `column()` only yields fixed identifiers, so formatting it is safe.
        let query = format!("SELECT {COLUMNS} FROM films ORDER BY {}, id", sort.column());
        let films = sqlx::query_as::<_, Film>(&query).fetch_all(pool).await?;
        Self::with_actors(pool, films).await
    }

    /// Find films whose own name, or whose actor's name, contains `name_part`.
    ///
    /// Matching is case-sensitive. Wildcards in `name_part` match literally.
    /// A part that matches nothing yields an empty list.
    pub async fn search(
        pool: &PgPool,
        kind: FilmSearchKind,
        name_part: &str,
    ) -> Result<Vec<FilmWithActors>, RepoError> {
        let pattern = contains_pattern(name_part);
        let query = match kind {
            FilmSearchKind::FilmName => format!(
                "SELECT {COLUMNS} FROM films \
                 WHERE name LIKE $1 ESCAPE '\\' \
                 ORDER BY id"
            ),
            FilmSearchKind::ActorName => format!(
                "SELECT {QUALIFIED_COLUMNS} FROM films f \
                 WHERE EXISTS ( \
                     SELECT 1 FROM films_actors fa \
                     JOIN actors a ON a.id = fa.actor_id \
                     WHERE fa.film_id = f.id AND a.name LIKE $1 ESCAPE '\\' \
                 ) \
                 ORDER BY f.id"
            ),
        };

        let films = sqlx::query_as::<_, Film>(&query)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;
        Self::with_actors(pool, films).await
    }

    /// Delete a film. Its association rows go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM films WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    /// Names of the actors associated with a film, in actor id order.
    pub async fn actor_names(pool: &PgPool, film_id: DbId) -> Result<Vec<String>, RepoError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT a.name FROM actors a
             JOIN films_actors fa ON fa.actor_id = a.id
             WHERE fa.film_id = $1
             ORDER BY a.id",
        )
        .bind(film_id)
        .fetch_all(pool)
        .await?;
        Ok(names)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn with_actors(
        pool: &PgPool,
        films: Vec<Film>,
    ) -> Result<Vec<FilmWithActors>, RepoError> {
        let mut result = Vec::with_capacity(films.len());
        for film in films {
            let actors = Self::actor_names(pool, film.id).await?;
            result.push(FilmWithActors { film, actors });
        }
        Ok(result)
    }

    /// Actor names are not unique; the lowest id wins.
    async fn actor_id_by_name(
        tx: &mut Transaction<'_, Postgres>,
        name: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM actors WHERE name = $1 ORDER BY id LIMIT 1")
            .bind(name)
            .fetch_optional(&mut **tx)
            .await
    }
}
