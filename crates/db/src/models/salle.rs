//! Salle (auditorium) entity model and DTO.

use serde::{Deserialize, Serialize};

use apicinema_core::types::EntityId;

use super::{Cinema, Entity};

/// An auditorium, with its owning cinema resolved from `salles.cinema_id`.
///
/// `cinema` is `None` when the row has no cinema or points at one that no
/// longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Salle {
    pub id: EntityId,
    pub number: i32,
    pub capacity: i32,
    #[serde(default)]
    pub cinema: Option<Cinema>,
}

/// Wire shape of a salle. The nested cinema is carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalleDto {
    #[serde(default)]
    pub id: EntityId,
    pub number: i32,
    pub capacity: i32,
    #[serde(default)]
    pub cinema: Option<Cinema>,
}

impl From<Salle> for SalleDto {
    fn from(salle: Salle) -> Self {
        Self {
            id: salle.id,
            number: salle.number,
            capacity: salle.capacity,
            cinema: salle.cinema,
        }
    }
}

impl From<SalleDto> for Salle {
    fn from(dto: SalleDto) -> Self {
        Self {
            id: dto.id,
            number: dto.number,
            capacity: dto.capacity,
            cinema: dto.cinema,
        }
    }
}

impl Entity for Salle {
    const NAME: &'static str = "Salle";
    type Dto = SalleDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Salle {
    /// Identifier of the referenced cinema, as stored in `salles.cinema_id`.
    pub fn cinema_id(&self) -> Option<&str> {
        self.cinema.as_ref().map(|c| c.id.as_str())
    }
}
