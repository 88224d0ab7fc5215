//! Repository for the `seances` table.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use apicinema_core::types::Timestamp;

use crate::models::{Salle, Seance};

use super::cinema_repo::joined_cinema;
use super::salle_repo::joined_salle;
use super::Repository;

/// Seance columns with salle and cinema joined in.
const SELECT: &str = "SELECT se.id, se.date, \
                             sa.id AS salle_id, sa.number AS salle_number, \
                             sa.capacity AS salle_capacity, \
                             c.id AS cinema_id, c.name AS cinema_name \
                      FROM seances se \
                      LEFT JOIN salles sa ON sa.id = se.salle_id \
                      LEFT JOIN cinemas c ON c.id = sa.cinema_id";

#[derive(FromRow)]
struct SeanceRow {
    id: String,
    date: Timestamp,
    salle_id: Option<String>,
    salle_number: Option<i32>,
    salle_capacity: Option<i32>,
    cinema_id: Option<String>,
    cinema_name: Option<String>,
}

impl SeanceRow {
    fn into_seance(self) -> Seance {
        let cinema = joined_cinema(self.cinema_id, self.cinema_name);
        Seance {
            id: self.id,
            date: self.date,
            salle: joined_salle(self.salle_id, self.salle_number, self.salle_capacity, cinema),
        }
    }
}

/// Rebuild a seance from the `seance_*` columns of a LEFT JOIN.
pub(crate) fn joined_seance(
    id: Option<String>,
    date: Option<Timestamp>,
    salle: Option<Salle>,
) -> Option<Seance> {
    match (id, date) {
        (Some(id), Some(date)) => Some(Seance { id, date, salle }),
        _ => None,
    }
}

/// Provides CRUD operations for seances.
pub struct SeanceRepo {
    pool: PgPool,
}

impl SeanceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Seance> for SeanceRepo {
    async fn find_all(&self) -> Result<Vec<Seance>, sqlx::Error> {
        let query = format!("{SELECT} ORDER BY se.id");
        let rows = sqlx::query_as::<_, SeanceRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(SeanceRow::into_seance).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Seance>, sqlx::Error> {
        let query = format!("{SELECT} WHERE se.id = $1");
        let row = sqlx::query_as::<_, SeanceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(SeanceRow::into_seance))
    }

    async fn save(&self, seance: &Seance) -> Result<Seance, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO seances (id, date, salle_id)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO UPDATE SET
                date = EXCLUDED.date,
                salle_id = EXCLUDED.salle_id",
        )
        .bind(&seance.id)
        .bind(seance.date)
        .bind(seance.salle_id())
        .execute(&mut *tx)
        .await?;

        let query = format!("{SELECT} WHERE se.id = $1");
        let row = sqlx::query_as::<_, SeanceRow>(&query)
            .bind(&seance.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into_seance())
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM seances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
