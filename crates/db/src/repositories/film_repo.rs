//! Repository for the `films` table.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use apicinema_core::types::Timestamp;

use crate::models::Film;

use super::cinema_repo::joined_cinema;
use super::salle_repo::joined_salle;
use super::seance_repo::joined_seance;
use super::Repository;

/// Film columns with the full seance -> salle -> cinema chain joined in.
const SELECT: &str = "SELECT f.id, f.title, f.duration, \
                             se.id AS seance_id, se.date AS seance_date, \
                             sa.id AS salle_id, sa.number AS salle_number, \
                             sa.capacity AS salle_capacity, \
                             c.id AS cinema_id, c.name AS cinema_name \
                      FROM films f \
                      LEFT JOIN seances se ON se.id = f.seance_id \
                      LEFT JOIN salles sa ON sa.id = se.salle_id \
                      LEFT JOIN cinemas c ON c.id = sa.cinema_id";

#[derive(FromRow)]
struct FilmRow {
    id: String,
    title: String,
    duration: f64,
    seance_id: Option<String>,
    seance_date: Option<Timestamp>,
    salle_id: Option<String>,
    salle_number: Option<i32>,
    salle_capacity: Option<i32>,
    cinema_id: Option<String>,
    cinema_name: Option<String>,
}

impl FilmRow {
    fn into_film(self) -> Film {
        let cinema = joined_cinema(self.cinema_id, self.cinema_name);
        let salle = joined_salle(self.salle_id, self.salle_number, self.salle_capacity, cinema);
        Film {
            id: self.id,
            title: self.title,
            duration: self.duration,
            seance: joined_seance(self.seance_id, self.seance_date, salle),
        }
    }
}

/// Provides CRUD operations for films.
pub struct FilmRepo {
    pool: PgPool,
}

impl FilmRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Film> for FilmRepo {
    async fn find_all(&self) -> Result<Vec<Film>, sqlx::Error> {
        let query = format!("{SELECT} ORDER BY f.id");
        let rows = sqlx::query_as::<_, FilmRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(FilmRow::into_film).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Film>, sqlx::Error> {
        let query = format!("{SELECT} WHERE f.id = $1");
        let row = sqlx::query_as::<_, FilmRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(FilmRow::into_film))
    }

    async fn save(&self, film: &Film) -> Result<Film, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO films (id, title, duration, seance_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                duration = EXCLUDED.duration,
                seance_id = EXCLUDED.seance_id",
        )
        .bind(&film.id)
        .bind(&film.title)
        .bind(film.duration)
        .bind(film.seance_id())
        .execute(&mut *tx)
        .await?;

        let query = format!("{SELECT} WHERE f.id = $1");
        let row = sqlx::query_as::<_, FilmRow>(&query)
            .bind(&film.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.into_film())
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM films WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
