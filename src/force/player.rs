//! Player records: read-only reference data for consolidation

use serde::{Deserialize, Serialize};

use crate::core::types::{Camouflage, PlayerId, TeamId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: TeamId,
    pub camouflage: Camouflage,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, team: TeamId) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            camouflage: Camouflage::default(),
        }
    }
}
