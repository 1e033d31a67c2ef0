//! Book instances (copies) repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{BookInstance, NewBookInstance},
};

const COLUMNS: &str = "bi.id, bi.book_id, bi.imprint, bi.status, bi.due_back";

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all copies with their book titles, sorted by title
    pub async fn list(&self) -> AppResult<Vec<BookInstance>> {
        let instances = sqlx::query_as::<_, BookInstance>(&format!(
            r#"
            SELECT {}, b.title AS book_title
            FROM book_instances bi
            JOIN books b ON bi.book_id = b.id
            ORDER BY b.title ASC, bi.id ASC
            "#,
            COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(instances)
    }

    /// Get a copy by ID with its book title populated
    pub async fn get(&self, id: i32) -> AppResult<Option<BookInstance>> {
        let instance = sqlx::query_as::<_, BookInstance>(&format!(
            r#"
            SELECT {}, b.title AS book_title
            FROM book_instances bi
            JOIN books b ON bi.book_id = b.id
            WHERE bi.id = $1
            "#,
            COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(instance)
    }

    /// All copies of one book
    pub async fn list_by_book(&self, book_id: i32) -> AppResult<Vec<BookInstance>> {
        let instances = sqlx::query_as::<_, BookInstance>(&format!(
            r#"
            SELECT {}, b.title AS book_title
            FROM book_instances bi
            JOIN books b ON bi.book_id = b.id
            WHERE bi.book_id = $1
            ORDER BY bi.id ASC
            "#,
            COLUMNS
        ))
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(instances)
    }

    /// Insert a new copy
    pub async fn create(&self, instance: &NewBookInstance) -> AppResult<BookInstance> {
        let created = sqlx::query_as::<_, BookInstance>(
            r#"
            INSERT INTO book_instances (book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4)
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(instance.book_id)
        .bind(&instance.imprint)
        .bind(instance.status)
        .bind(instance.due_back)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Replace a copy's fields by ID
    pub async fn replace(
        &self,
        id: i32,
        instance: &NewBookInstance,
    ) -> AppResult<Option<BookInstance>> {
        let updated = sqlx::query_as::<_, BookInstance>(
            r#"
            UPDATE book_instances
            SET book_id = $2, imprint = $3, status = $4, due_back = $5
            WHERE id = $1
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(id)
        .bind(instance.book_id)
        .bind(&instance.imprint)
        .bind(instance.status)
        .bind(instance.due_back)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    /// Delete a copy by ID
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
