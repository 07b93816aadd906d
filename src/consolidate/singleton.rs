//! Maximal-granularity split: one top-level force per individual entity
//!
//! Used when the downstream simulation needs every entity to act as its own
//! formation. Owner and team come from the force that held the entity.

use crate::consolidate::container::{Container, ContainerIds};
use crate::core::types::TeamId;
use crate::force::graph::ForceGraph;
use crate::force::node::ForceNode;

pub fn build(graph: &ForceGraph) -> Vec<Container> {
    let mut ids = ContainerIds::default();
    let mut roots = Vec::new();

    for &top_id in graph.top_level_forces() {
        let Some(top) = graph.force(top_id) else {
            continue;
        };
        explode(graph, top, &mut ids, &mut roots);
        for sub_id in graph.sub_force_ids_recursive(top_id) {
            if let Some(sub) = graph.force(sub_id) {
                explode(graph, sub, &mut ids, &mut roots);
            }
        }
    }
    roots
}

fn explode(
    graph: &ForceGraph,
    node: &ForceNode,
    ids: &mut ContainerIds,
    roots: &mut Vec<Container>,
) {
    let team = graph.team_of(node.owner).unwrap_or(TeamId(0));
    for &entity in &node.entities {
        let name = graph
            .entity(entity)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| format!("Entity {}", entity.0));

        let mut leaf = Container::new(ids.next(), team, node.owner);
        leaf.name = Some(name.clone());
        leaf.entities.push(entity);

        let mut top = Container::new(ids.next(), team, node.owner);
        top.name = Some(name);
        top.children.push(leaf);
        roots.push(top);
    }
}
