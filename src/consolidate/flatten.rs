//! Flattening: one top-level force per entity-holding force
//!
//! Every force that directly holds entities, at any nesting depth, becomes
//! its own top-level force with a single sub-force carrying those entities.
//! Name, owner, and team are preserved. Forces with neither entities nor
//! sub-forces vanish. Applying this to an already-flat forest reproduces it.

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
        push_if_holding(graph, top, &mut ids, &mut roots);
        for sub_id in graph.sub_force_ids_recursive(top_id) {
            if let Some(sub) = graph.force(sub_id) {
                push_if_holding(graph, sub, &mut ids, &mut roots);
            }
        }
    }
    roots
}

fn push_if_holding(
    graph: &ForceGraph,
    node: &ForceNode,
    ids: &mut ContainerIds,
    roots: &mut Vec<Container>,
) {
    if node.entities.is_empty() {
        return;
    }
    let team = graph.team_of(node.owner).unwrap_or(TeamId(0));

    let mut leaf = Container::new(ids.next(), team, node.owner);
    leaf.name = Some(node.name.clone());
    leaf.entities.extend_from_slice(&node.entities);

    let mut top = Container::new(ids.next(), team, node.owner);
    top.name = Some(node.name.clone());
    top.children.push(leaf);
    roots.push(top);
}
