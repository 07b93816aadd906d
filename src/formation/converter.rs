//! Building formations from consolidated forces
//!
//! Damage is averaged with a ceiling: per-band totals are summed over all
//! converted members, divided by member count, and rounded up. The round-up
//! is a deliberate conservative bias. Zero converted members yields an
//! all-zero vector, never a division by zero.

use serde::{Deserialize, Serialize};

use crate::core::types::{EntityId, ForceId, PlayerId};
use crate::force::graph::ForceGraph;
use crate::formation::role::Role;
use crate::formation::stats::{CombatStats, DamageVector, StatConverter};

/// One formation member: an entity reduced to a health pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimUnit {
    pub entity_id: EntityId,
    pub name: String,
    /// Armor plus structure at creation
    pub full_health: u32,
    pub current_health: u32,
}

/// Aggregated abstract combat unit consumed by the auto-resolve simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    pub owner: PlayerId,
    pub name: String,
    pub role: Role,
    pub starting_size: u32,
    pub current_size: u32,
    pub units: Vec<SimUnit>,
    pub damage: DamageVector,
}

/// Convert one top-level force into a formation.
///
/// Every leaf-level member entity is converted via `converter`; entities that
/// fail to convert are logged and skipped, which is reflected in the
/// formation's size (a member destroyed before the simulation begins is
/// simply absent).
pub fn force_to_formation(
    graph: &ForceGraph,
    force: ForceId,
    converter: &dyn StatConverter,
) -> Formation {
    let name = graph
        .force(force)
        .map(|f| f.name.clone())
        .unwrap_or_default();
    let owner = graph
        .force(force)
        .map(|f| f.owner)
        .unwrap_or(PlayerId(0));

    let mut members = Vec::new();
    for entity_id in graph.entity_ids_recursive(force) {
        let Some(entity) = graph.entity(entity_id) else {
            tracing::error!(
                "Entity {:?} not found in any source during formation conversion; skipping",
                entity_id
            );
            continue;
        };
        match converter.convert(entity) {
            Some(stats) => members.push((entity_id, entity.name.clone(), stats)),
            None => {
                tracing::warn!(
                    "No conversion possible for entity {:?} ({}); skipping",
                    entity_id,
                    entity.name
                );
            }
        }
    }

    assemble(owner, name, members)
}

/// Per-entity variant: one formation wrapping a single entity.
///
/// Returns `None` when the entity cannot be resolved or converted.
pub fn entity_to_formation(
    graph: &ForceGraph,
    entity_id: EntityId,
    converter: &dyn StatConverter,
) -> Option<Formation> {
    let entity = graph.entity(entity_id)?;
    let stats = converter.convert(entity)?;
    Some(assemble(
        entity.owner,
        entity.name.clone(),
        vec![(entity_id, entity.name.clone(), stats)],
    ))
}

/// Convert every top-level force in the graph, in order.
pub fn convert_all(graph: &ForceGraph, converter: &dyn StatConverter) -> Vec<Formation> {
    graph
        .top_level_forces()
        .iter()
        .map(|&id| force_to_formation(graph, id, converter))
        .collect()
}

fn assemble(
    owner: PlayerId,
    name: String,
    members: Vec<(EntityId, String, CombatStats)>,
) -> Formation {
    let damage = average_damage(members.iter().map(|(_, _, s)| s.damage));
    let role = mode_role(members.iter().map(|(_, _, s)| s.role));

    let units: Vec<SimUnit> = members
        .into_iter()
        .map(|(entity_id, unit_name, stats)| {
            let health = stats.armor + stats.structure;
            SimUnit {
                entity_id,
                name: unit_name,
                full_health: health,
                current_health: health,
            }
        })
        .collect();

    let current_size = units.len() as u32;
    Formation {
        owner,
        name,
        role,
        // A unit lost before the simulation begins is already reflected
        starting_size: current_size,
        current_size,
        units,
        damage,
    }
}

/// Sum each band over the members, divide by member count, round up.
fn average_damage(members: impl Iterator<Item = DamageVector>) -> DamageVector {
    let mut total = DamageVector::default();
    let mut count: u32 = 0;
    for damage in members {
        total.short += damage.short;
        total.medium += damage.medium;
        total.long += damage.long;
        count += 1;
    }
    if count == 0 {
        return DamageVector::default();
    }
    DamageVector::new(
        total.short.div_ceil(count),
        total.medium.div_ceil(count),
        total.long.div_ceil(count),
    )
}

/// Most frequent role, first-seen wins ties, default when no members.
fn mode_role(roles: impl Iterator<Item = Role>) -> Role {
    let mut counts: Vec<(Role, u32)> = Vec::new();
    for role in roles {
        match counts.iter_mut().find(|(r, _)| *r == role) {
            Some((_, n)) => *n += 1,
            None => counts.push((role, 1)),
        }
    }
    let mut best: Option<(Role, u32)> = None;
    for (role, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((role, count)),
        }
    }
    best.map(|(role, _)| role).unwrap_or_default()
}
