//! Seance (showtime) entity model and DTO.

use serde::{Deserialize, Serialize};

use apicinema_core::types::{EntityId, Timestamp};

use super::{Entity, Salle};

/// A scheduled showing in a salle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seance {
    pub id: EntityId,
    pub date: Timestamp,
    #[serde(default)]
    pub salle: Option<Salle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeanceDto {
    #[serde(default)]
    pub id: EntityId,
    pub date: Timestamp,
    #[serde(default)]
    pub salle: Option<Salle>,
}

impl From<Seance> for SeanceDto {
    fn from(seance: Seance) -> Self {
        Self {
            id: seance.id,
            date: seance.date,
            salle: seance.salle,
        }
    }
}

impl From<SeanceDto> for Seance {
    fn from(dto: SeanceDto) -> Self {
        Self {
            id: dto.id,
            date: dto.date,
            salle: dto.salle,
        }
    }
}

impl Entity for Seance {
    const NAME: &'static str = "Seance";
    type Dto = SeanceDto;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Seance {
    pub fn salle_id(&self) -> Option<&str> {
        self.salle.as_ref().map(|s| s.id.as_str())
    }
}
