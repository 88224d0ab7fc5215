//! Repository layer.
//!
//! [`Repository`] is the keyed-datastore contract the services depend on.
//! Each Postgres repository holds a pool handle and issues runtime-checked
//! queries; [`MemoryStore`] implements the same contract for every entity.

use async_trait::async_trait;

use crate::models::Entity;

pub mod cinema_repo;
pub mod film_repo;
pub mod memory;
pub mod salle_repo;
pub mod seance_repo;

pub use cinema_repo::CinemaRepo;
pub use film_repo::FilmRepo;
pub use memory::MemoryStore;
pub use salle_repo::SalleRepo;
pub use seance_repo::SeanceRepo;

/// Primary-key access to one entity type.
///
/// Entities come back with their reference chain resolved from the rows
/// currently stored, so a read never returns a stale nested copy.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Every stored entity, ordered by id. Empty when nothing is stored.
    async fn find_all(&self) -> Result<Vec<E>, sqlx::Error>;

    async fn find_by_id(&self, id: &str) -> Result<Option<E>, sqlx::Error>;

    /// Insert `entity`, or replace the row with the same id. Returns the
    /// stored entity as a subsequent read would see it.
    ///
    /// Only the id of a nested reference is stored. A reference to a row that
    /// does not exist is kept but comes back as `None`, so the result is not
    /// equal to `entity` in that case.
    async fn save(&self, entity: &E) -> Result<E, sqlx::Error>;

    /// Remove the row with `id`. Returns `false` when there was none.
    async fn delete(&self, id: &str) -> Result<bool, sqlx::Error>;
}
