//! Entity structs, their wire DTOs, and the explicit conversions between them.
//!
//! Each submodule contains:
//! - The entity struct as the datastore hands it back (references resolved)
//! - A DTO with exactly the same fields, used on the HTTP boundary
//! - `From` impls in both directions, every field assigned by hand

use serde::de::DeserializeOwned;
use serde::Serialize;

use apicinema_core::types::EntityId;

pub mod cinema;
pub mod film;
pub mod salle;
pub mod seance;

pub use cinema::{Cinema, CinemaDto};
pub use film::{Film, FilmDto};
pub use salle::{Salle, SalleDto};
pub use seance::{Seance, SeanceDto};

/// A keyed record persisted through a [`Repository`](crate::repositories::Repository).
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable type name used in not-found errors and logs.
    const NAME: &'static str;

    /// Wire representation exchanged with HTTP clients.
    type Dto: Serialize
        + DeserializeOwned
        + Clone
        + Send
        + Sync
        + 'static
        + From<Self>
        + Into<Self>;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: EntityId);
}
