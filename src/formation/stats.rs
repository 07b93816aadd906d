//! Abstract combat-strength records and the stat-conversion seam
//!
//! The real conversion (tabletop stat sheet -> abstract record) lives outside
//! this crate; formations only depend on the `StatConverter` trait. A
//! conversion can fail per entity, which the converter logs and skips.

use serde::{Deserialize, Serialize};

use crate::force::entity::CombatEntity;
use crate::formation::role::Role;

/// Damage totals by range band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageVector {
    pub short: u32,
    pub medium: u32,
    pub long: u32,
}

impl DamageVector {
    pub fn new(short: u32, medium: u32, long: u32) -> Self {
        Self { short, medium, long }
    }
}

/// One entity's combat strength, abstracted for the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatStats {
    pub role: Role,
    pub armor: u32,
    pub structure: u32,
    pub damage: DamageVector,
}

/// Converts an entity into its abstract combat-strength record.
///
/// `None` means no conversion is possible for this entity.
pub trait StatConverter {
    fn convert(&self, entity: &CombatEntity) -> Option<CombatStats>;
}

impl<F> StatConverter for F
where
    F: Fn(&CombatEntity) -> Option<CombatStats>,
{
    fn convert(&self, entity: &CombatEntity) -> Option<CombatStats> {
        self(entity)
    }
}

/// Converter that reads the stats stored on the entity itself.
///
/// Destroyed entities do not convert; a destroyed member is meant to be
/// missing from the formation before the simulation starts.
#[derive(Debug, Default)]
pub struct BasicStatConverter;

impl StatConverter for BasicStatConverter {
    fn convert(&self, entity: &CombatEntity) -> Option<CombatStats> {
        if entity.destroyed {
            return None;
        }
        Some(CombatStats {
            role: entity.role,
            armor: entity.armor,
            structure: entity.structure,
            damage: entity.damage,
        })
    }
}
