//! Repository for the `cinemas` table.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::Cinema;

use super::Repository;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for cinemas.
pub struct CinemaRepo {
    pool: PgPool,
}

impl CinemaRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Rebuild a cinema from the `cinema_*` columns of a LEFT JOIN.
///
/// Both columns are NULL when the reference is unset or dangling.
pub(crate) fn joined_cinema(id: Option<String>, name: Option<String>) -> Option<Cinema> {
    match (id, name) {
        (Some(id), Some(name)) => Some(Cinema { id, name }),
        _ => None,
    }
}

#[async_trait]
impl Repository<Cinema> for CinemaRepo {
    async fn find_all(&self) -> Result<Vec<Cinema>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinemas ORDER BY id");
        sqlx::query_as::<_, Cinema>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Cinema>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cinemas WHERE id = $1");
        sqlx::query_as::<_, Cinema>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save(&self, cinema: &Cinema) -> Result<Cinema, sqlx::Error> {
        let query = format!(
            "INSERT INTO cinemas (id, name)
             VALUES ($1, $2)
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cinema>(&query)
            .bind(&cinema.id)
            .bind(&cinema.name)
            .fetch_one(&self.pool)
            .await
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cinemas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
