//! Genres repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Genre, NewGenre},
};

#[derive(Clone)]
pub struct GenresRepository {
    pool: Pool<Postgres>,
}

impl GenresRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all genres sorted by name
    pub async fn list(&self) -> AppResult<Vec<Genre>> {
        let genres =
            sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(genres)
    }

    /// Get genre by ID
    pub async fn get(&self, id: i32) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(genre)
    }

    /// Case-sensitive exact-match lookup used by the create pipeline's
    /// duplicate check. Names are not unique at the storage level, so take
    /// the oldest match.
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, name FROM genres WHERE name = $1 ORDER BY id ASC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(genre)
    }

    /// Insert a new genre
    pub async fn create(&self, genre: &NewGenre) -> AppResult<Genre> {
        let created = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name) VALUES ($1) RETURNING id, name",
        )
        .bind(&genre.name)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Replace a genre's fields by ID
    pub async fn replace(&self, id: i32, genre: &NewGenre) -> AppResult<Option<Genre>> {
        let updated = sqlx::query_as::<_, Genre>(
            "UPDATE genres SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(&genre.name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a genre by ID
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
