//! Persistence layer: entity models, the repository abstraction, and the
//! Postgres and in-memory datastores behind it.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

use models::{Cinema, Film, Salle, Seance};
use repositories::{CinemaRepo, FilmRepo, MemoryStore, Repository, SalleRepo, SeanceRepo};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// The backing store selected at startup.
///
/// Hands out one repository per entity type; cloning is cheap.
#[derive(Clone)]
pub enum Datastore {
    Postgres(DbPool),
    Memory(Arc<MemoryStore>),
}

impl Datastore {
    /// A fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::Memory(Arc::new(MemoryStore::new()))
    }

    /// Short label for logs and health output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::Postgres(pool) => health_check(pool).await,
            Self::Memory(_) => Ok(()),
        }
    }

    pub fn cinemas(&self) -> Arc<dyn Repository<Cinema>> {
        match self {
            Self::Postgres(pool) => Arc::new(CinemaRepo::new(pool.clone())),
            Self::Memory(store) => store.clone(),
        }
    }

    pub fn salles(&self) -> Arc<dyn Repository<Salle>> {
        match self {
            Self::Postgres(pool) => Arc::new(SalleRepo::new(pool.clone())),
            Self::Memory(store) => store.clone(),
        }
    }

    pub fn seances(&self) -> Arc<dyn Repository<Seance>> {
        match self {
            Self::Postgres(pool) => Arc::new(SeanceRepo::new(pool.clone())),
            Self::Memory(store) => store.clone(),
        }
    }

    pub fn films(&self) -> Arc<dyn Repository<Film>> {
        match self {
            Self::Postgres(pool) => Arc::new(FilmRepo::new(pool.clone())),
            Self::Memory(store) => store.clone(),
        }
    }
}
