//! In-memory datastore.
//!
//! Keeps the same table shape as the Postgres schema: each table stores flat
//! rows with foreign ids, and reads resolve the reference chain the way the
//! SQL `LEFT JOIN`s do. A dangling reference therefore reads back as `None`
//! here exactly as it does in Postgres.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::SubsecRound;
use tokio::sync::RwLock;

use apicinema_core::types::{EntityId, Timestamp};

use crate::models::{Cinema, Film, Salle, Seance};

use super::Repository;

struct SalleRecord {
    number: i32,
    capacity: i32,
    cinema_id: Option<EntityId>,
}

struct SeanceRecord {
    date: Timestamp,
    salle_id: Option<EntityId>,
}

struct FilmRecord {
    title: String,
    duration: f64,
    seance_id: Option<EntityId>,
}

#[derive(Default)]
struct Tables {
    cinemas: BTreeMap<EntityId, String>,
    salles: BTreeMap<EntityId, SalleRecord>,
    seances: BTreeMap<EntityId, SeanceRecord>,
    films: BTreeMap<EntityId, FilmRecord>,
}

impl Tables {
    fn cinema(&self, id: &str) -> Option<Cinema> {
        self.cinemas.get(id).map(|name| Cinema {
            id: id.to_string(),
            name: name.clone(),
        })
    }

    fn salle(&self, id: &str) -> Option<Salle> {
        self.salles.get(id).map(|row| Salle {
            id: id.to_string(),
            number: row.number,
            capacity: row.capacity,
            cinema: row.cinema_id.as_deref().and_then(|c| self.cinema(c)),
        })
    }

    fn seance(&self, id: &str) -> Option<Seance> {
        self.seances.get(id).map(|row| Seance {
            id: id.to_string(),
            date: row.date,
            salle: row.salle_id.as_deref().and_then(|s| self.salle(s)),
        })
    }

    fn film(&self, id: &str) -> Option<Film> {
        self.films.get(id).map(|row| Film {
            id: id.to_string(),
            title: row.title.clone(),
            duration: row.duration,
            seance: row.seance_id.as_deref().and_then(|s| self.seance(s)),
        })
    }
}

/// Thread-safe in-memory implementation of [`Repository`] for every entity.
///
/// Uses a single `RwLock` over all tables so a save and the re-read that
/// builds its return value see the same state.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Cinema> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Cinema>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables.cinemas.keys().filter_map(|id| tables.cinema(id)).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Cinema>, sqlx::Error> {
        Ok(self.tables.read().await.cinema(id))
    }

    async fn save(&self, cinema: &Cinema) -> Result<Cinema, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.cinemas.insert(cinema.id.clone(), cinema.name.clone());
        tables.cinema(&cinema.id).ok_or(sqlx::Error::RowNotFound)
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        Ok(self.tables.write().await.cinemas.remove(id).is_some())
    }
}

#[async_trait]
impl Repository<Salle> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Salle>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables.salles.keys().filter_map(|id| tables.salle(id)).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Salle>, sqlx::Error> {
        Ok(self.tables.read().await.salle(id))
    }

    async fn save(&self, salle: &Salle) -> Result<Salle, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.salles.insert(
            salle.id.clone(),
            SalleRecord {
                number: salle.number,
                capacity: salle.capacity,
                cinema_id: salle.cinema_id().map(str::to_string),
            },
        );
        tables.salle(&salle.id).ok_or(sqlx::Error::RowNotFound)
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        Ok(self.tables.write().await.salles.remove(id).is_some())
    }
}

#[async_trait]
impl Repository<Seance> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Seance>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables.seances.keys().filter_map(|id| tables.seance(id)).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Seance>, sqlx::Error> {
        Ok(self.tables.read().await.seance(id))
    }

    async fn save(&self, seance: &Seance) -> Result<Seance, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.seances.insert(
            seance.id.clone(),
            SeanceRecord {
                // TIMESTAMPTZ keeps microseconds.
                date: seance.date.trunc_subsecs(6),
                salle_id: seance.salle_id().map(str::to_string),
            },
        );
        tables.seance(&seance.id).ok_or(sqlx::Error::RowNotFound)
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        Ok(self.tables.write().await.seances.remove(id).is_some())
    }
}

#[async_trait]
impl Repository<Film> for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Film>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables.films.keys().filter_map(|id| tables.film(id)).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Film>, sqlx::Error> {
        Ok(self.tables.read().await.film(id))
    }

    async fn save(&self, film: &Film) -> Result<Film, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.films.insert(
            film.id.clone(),
            FilmRecord {
                title: film.title.clone(),
                duration: film.duration,
                seance_id: film.seance_id().map(str::to_string),
            },
        );
        tables.film(&film.id).ok_or(sqlx::Error::RowNotFound)
    }

    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error> {
        Ok(self.tables.write().await.films.remove(id).is_some())
    }
}
