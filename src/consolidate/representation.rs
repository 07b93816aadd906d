//! Flattened per-top-level-force snapshots
//!
//! The extractor erases sub-force structure so balancing strategies can
//! freely re-partition entities. It never mutates the graph and never drops
//! or duplicates entity IDs relative to the source.

use crate::core::types::{EntityId, ForceId, PlayerId, TeamId};
use crate::force::graph::ForceGraph;

/// One top-level force, hierarchy erased
#[derive(Debug, Clone)]
pub struct ForceRepresentation {
    pub force_id: ForceId,
    pub team: TeamId,
    pub owner: PlayerId,
    /// Full recursive expansion of the force's member entities
    pub entities: Vec<EntityId>,
}

/// Snapshot every top-level force in the graph.
///
/// A force whose owner has no team entry is reported under `TeamId(0)`;
/// the live game always supplies a complete player registry, so this is a
/// tolerance, not a contract.
pub fn extract(graph: &ForceGraph) -> Vec<ForceRepresentation> {
    graph
        .top_level_forces()
        .iter()
        .filter_map(|&id| {
            let node = graph.force(id)?;
            let team = graph.team_of(node.owner).unwrap_or(TeamId(0));
            Some(ForceRepresentation {
                force_id: id,
                team,
                owner: node.owner,
                entities: graph.entity_ids_recursive(id),
            })
        })
        .collect()
}
