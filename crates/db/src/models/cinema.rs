//! Cinema entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use apicinema_core::types::EntityId;

use super::Entity;

/// A row from the `cinemas` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Cinema {
    pub id: EntityId,
    pub name: String,
}

/// Wire shape of a cinema. An empty or missing `id` asks the service to assign one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CinemaDto {
    #[serde(default)]
    pub id: EntityId,
    pub name: String,
}

impl From<Cinema> for CinemaDto {
    fn from(cinema: Cinema) -> Self {
        Self {
            id: cinema.id,
            name: cinema.name,
        }
    }
}

impl From<CinemaDto> for Cinema {
    fn from(dto: CinemaDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl Entity for Cinema {
    const NAME: &'static str = "Cinema";
    type Dto = CinemaDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
