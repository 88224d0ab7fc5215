//! Film entity model and DTO.
//!
//! A film record is tied to a single seance, so the same title shown twice
//! is two film rows.

use serde::{Deserialize, Serialize};

use apicinema_core::types::EntityId;

use super::{Entity, Seance};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: EntityId,
    pub title: String,
    /// Running time in minutes.
    pub duration: f64,
    #[serde(default)]
    pub seance: Option<Seance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDto {
    #[serde(default)]
    pub id: EntityId,
    pub title: String,
    pub duration: f64,
    #[serde(default)]
    pub seance: Option<Seance>,
}

impl From<Film> for FilmDto {
    fn from(film: Film) -> Self {
        Self {
            id: film.id,
            title: film.title,
            duration: film.duration,
            seance: film.seance,
        }
    }
}

impl From<FilmDto> for Film {
    fn from(dto: FilmDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            duration: dto.duration,
            seance: dto.seance,
        }
    }
}

impl Entity for Film {
    const NAME: &'static str = "Film";
    type Dto = FilmDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Film {
    pub fn seance_id(&self) -> Option<&str> {
        self.seance.as_ref().map(|s| s.id.as_str())
    }
}
