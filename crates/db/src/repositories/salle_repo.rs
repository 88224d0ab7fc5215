//! Repository for the `salles` table.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::models::{Cinema, Salle};

use super::cinema_repo::joined_cinema;
use super::Repository;

/// Salle columns with the owning cinema joined in.
const SELECT: &str = "SELECT s.id, s.number, s.capacity, \
                             c.id AS cinema_id, c.name AS cinema_name \
                      FROM salles s \
                      LEFT JOIN cinemas c ON c.id = s.cinema_id";

#[derive(FromRow)]
struct SalleRow {
    id: String,
    number: i32,
    capacity: i32,
    cinema_id: Option<String>,
    cinema_name: Option<String>,
}

impl SalleRow {
    fn into_salle(self) -> Salle {
        Salle {
            id: self.id,
            number: self.number,
            capacity: self.capacity,
            cinema: joined_cinema(self.cinema_id, self.cinema_name),
        }
    }
}

/// Rebuild a salle from the `salle_*` columns of a LEFT JOIN.
pub(crate) fn joined_salle(
    id: Option<String>,
    number: Option<i32>,
    capacity: Option<i32>,
    cinema: Option<Cinema>,
) -> Option<Salle> {
    match (id, number, capacity) {
        (Some(id), Some(number), Some(capacity)) => Some(Salle {
            id,
            number,
            capacity,
            cinema,
        }),
        _ => None,
    }
}

/// Provides CRUD operations for salles.
pub struct SalleRepo {
    pool: PgPool,
}

impl SalleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Salle> for SalleRepo {
    async fn find_all(&self) -> Result<Vec<Salle>, sqlx::Error> {
        let query = format!("{SELECT} ORDER BY s.id");
        let rows = sqlx::query_as::<_, SalleRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(SalleRow::into_salle).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Salle>, sqlx::Error> {
        let query = format!("{SELECT} WHERE s.id = $1");
        let row = sqlx::query_as::<_, SalleRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(SalleRow::into_salle))
    }

    /// Upsert the row, then re-read it with the cinema joined, in one transaction.
    async fn save(&self, salle: &Salle) -> Result<Salle, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO salles (id, number, capacity, cinema_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                number = EXCLUDED.number,
                capacity = EXCLUDED.capacity,
                cinema_id = EXCLUDED.cinema_id",
        )
        .bind(&salle.id)
        .bind(salle.number)
        .bind(salle.capacity)
        .bind(salle.cinema_id())
        .execute(&mut *tx)
        .await?;

        let query = format!("{SELECT} WHERE s.id = $1");
        let row = sqlx::query_as::<_, SalleRow>(&query)
            .bind(&salle.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into_salle())
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM salles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
