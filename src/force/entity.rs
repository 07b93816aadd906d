//! Combat entity records resolvable through the graph's unit registry

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, PlayerId};
use crate::formation::role::Role;
use crate::formation::stats::DamageVector;

/// An individual combat unit (vehicle, mech, infantry element)
///
/// Carries only what consolidation and formation conversion read; the full
/// tabletop stat sheet lives outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatEntity {
    pub id: EntityId,
    pub name: String,
    pub owner: PlayerId,
    pub armor: u32,
    pub structure: u32,
    pub damage: DamageVector,
    pub role: Role,
    pub destroyed: bool,
}

impl CombatEntity {
    pub fn new(id: EntityId, name: impl Into<String>, owner: PlayerId) -> Self {
        Self {
            id,
            name: name.into(),
            owner,
            armor: 0,
            structure: 0,
            damage: DamageVector::default(),
            role: Role::default(),
            destroyed: false,
        }
    }

    /// Aggregate health: armor plus structure
    pub fn total_health(&self) -> u32 {
        self.armor + self.structure
    }
}
