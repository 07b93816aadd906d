//! Topology-preserving reconstruction
//!
//! Rebuilds the existing forest exactly: nesting depth, names, and a
//! breadcrumb ancestry string per force. Before touching anything it scans
//! for parent-link cycles and for entities assigned to more than one force;
//! either is a fatal structural error and the graph is left untouched.
//! Forces unreachable from any top-level force are logged and dropped.

use std::collections::VecDeque;

use ahash::{AHashMap, AHashSet};

use crate::consolidate::container::{Container, ContainerIds};
use crate::core::error::{MusterError, Result};
use crate::core::types::{EntityId, ForceId, TeamId};
use crate::force::graph::ForceGraph;

pub fn build(graph: &ForceGraph) -> Result<Vec<Container>> {
    detect_cycles(graph)?;

    let mut ids = ContainerIds::default();

    // Breadth-first walk from the top-level forces. Duplicate entity
    // assignment is checked in visit order so the first offender is reported.
    let mut order: Vec<ForceId> = Vec::new();
    let mut reachable: AHashSet<ForceId> = AHashSet::new();
    let mut breadcrumbs: AHashMap<ForceId, String> = AHashMap::new();
    let mut assigned: AHashMap<EntityId, ForceId> = AHashMap::new();
    let mut pending: AHashMap<ForceId, Container> = AHashMap::new();

    let mut queue: VecDeque<ForceId> = graph.top_level_forces().iter().copied().collect();
    reachable.extend(queue.iter().copied());

    while let Some(id) = queue.pop_front() {
        let Some(node) = graph.force(id) else {
            continue;
        };
        order.push(id);

        let breadcrumb = match node.parent.and_then(|p| breadcrumbs.get(&p)) {
            Some(parent_crumb) => format!("{} > {}", parent_crumb, node.name),
            None => node.name.clone(),
        };
        breadcrumbs.insert(id, breadcrumb.clone());

        for &entity in &node.entities {
            if let Some(&first) = assigned.get(&entity) {
                return Err(MusterError::DuplicateEntityAssignment {
                    entity,
                    first,
                    second: id,
                });
            }
            assigned.insert(entity, id);
        }

        let team = graph.team_of(node.owner).unwrap_or(TeamId(0));
        let mut container = Container::new(ids.next(), team, node.owner);
        container.name = Some(node.name.clone());
        container.breadcrumb = Some(breadcrumb);
        if node.sub_forces.is_empty() {
            container.entities.extend_from_slice(&node.entities);
        } else if !node.entities.is_empty() {
            // Mixed force: normalize by moving direct entities into a
            // synthetic first child so no output force is both composite
            // and leaf.
            let mut direct = Container::new(ids.next(), team, node.owner);
            direct.name = Some(node.name.clone());
            direct.entities.extend_from_slice(&node.entities);
            container.children.push(direct);
        }
        pending.insert(id, container);

        for &child in &node.sub_forces {
            if reachable.insert(child) {
                queue.push_back(child);
            }
        }
    }

    warn_unreachable(graph, &reachable);

    // Children appear after their parent in BFS order, so a reverse pass
    // assembles every subtree before its parent consumes it.
    let mut built: AHashMap<ForceId, Container> = AHashMap::new();
    for &id in order.iter().rev() {
        let Some(node) = graph.force(id) else {
            continue;
        };
        let Some(mut container) = pending.remove(&id) else {
            continue;
        };
        for &child_id in &node.sub_forces {
            if let Some(child) = built.remove(&child_id) {
                if child.entities.is_empty() && child.children.is_empty() {
                    continue; // empty force contributes nothing
                }
                container.children.push(child);
            }
        }
        built.insert(id, container);
    }

    Ok(graph
        .top_level_forces()
        .iter()
        .filter_map(|id| built.remove(id))
        .filter(|c| !c.entities.is_empty() || !c.children.is_empty())
        .collect())
}

/// Walk parent links from every force; a force re-appearing above itself
/// is a cycle.
fn detect_cycles(graph: &ForceGraph) -> Result<()> {
    for start in graph.force_ids() {
        let mut seen: AHashSet<ForceId> = AHashSet::new();
        seen.insert(start);
        let mut current = start;
        while let Some(parent) = graph.force(current).and_then(|n| n.parent) {
            if !seen.insert(parent) {
                return Err(MusterError::CycleDetected(parent));
            }
            current = parent;
        }
    }
    Ok(())
}

fn warn_unreachable(graph: &ForceGraph, reachable: &AHashSet<ForceId>) {
    for id in graph.force_ids() {
        if !reachable.contains(&id) {
            if let Some(node) = graph.force(id) {
                tracing::warn!(
                    "Force {} ({:?}) is unreachable from any top-level force; dropping it and {} entities",
                    node.name,
                    id,
                    node.entities.len()
                );
            }
        }
    }
}
