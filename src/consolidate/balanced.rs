//! Team-balanced redistribution
//!
//! Groups every entity by team (deduplicating across players sharing a team),
//! then gives each team the same number of top-level forces, sized from the
//! largest team. Original force and player identity is discarded; output
//! containers carry only team, owner, and a generated name.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};

use crate::consolidate::container::{Container, ContainerIds};
use crate::consolidate::representation;
use crate::core::config::ConsolidateConfig;
use crate::core::types::{EntityId, PlayerId, TeamId};
use crate::force::graph::ForceGraph;

pub fn build(graph: &ForceGraph, config: &ConsolidateConfig) -> Vec<Container> {
    let reps = representation::extract(graph);

    // Group by team; a team may hold several players' forces, so entity IDs
    // are deduplicated across the whole team. BTreeMap keeps team iteration
    // deterministic.
    let mut by_team: BTreeMap<TeamId, Vec<EntityId>> = BTreeMap::new();
    let mut fallback_owner: AHashMap<TeamId, PlayerId> = AHashMap::new();
    let mut seen: AHashSet<EntityId> = AHashSet::new();
    for rep in &reps {
        fallback_owner.entry(rep.team).or_insert(rep.owner);
        let bucket = by_team.entry(rep.team).or_default();
        for &entity in &rep.entities {
            if seen.insert(entity) {
                bucket.push(entity);
            }
        }
    }
    by_team.retain(|_, entities| !entities.is_empty());

    let max_team_count = by_team.values().map(Vec::len).max().unwrap_or(0);
    if max_team_count == 0 {
        return Vec::new();
    }

    // Computed once from the largest team and reused for every team, so all
    // teams end up with the same top-level force count (within one) as the
    // downstream formation rules require.
    let top_count = match config.top_level_cap() {
        Some(cap) if cap > 0 => max_team_count.div_ceil(cap),
        _ => 1,
    };

    let mut ids = ContainerIds::default();
    let mut roots = Vec::new();
    for (&team, entities) in &by_team {
        let owner = graph
            .players_on_team(team)
            .first()
            .copied()
            .unwrap_or(fallback_owner[&team]);

        let mut slice = entities.len().div_ceil(top_count);
        if let Some(cap) = config.top_level_cap() {
            slice = slice.min(cap.max(1));
        }

        for (index, chunk) in entities.chunks(slice).enumerate() {
            let mut top = Container::new(ids.next(), team, owner);
            top.name = Some(format!("Team {} Force {}", team.0, index + 1));

            let sub_size = config.sub_force_cap().unwrap_or(chunk.len()).max(1);
            for sub_chunk in chunk.chunks(sub_size) {
                let mut leaf = Container::new(ids.next(), team, owner);
                leaf.entities.extend_from_slice(sub_chunk);
                top.children.push(leaf);
            }
            roots.push(top);
        }
    }
    roots
}
