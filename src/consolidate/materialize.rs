//! Rebuilds the live force graph from a container forest
//!
//! Pre-order depth-first construction with an explicit work stack. Force IDs
//! are assigned by the graph; camouflage is cloned from the owning player.
//! An entity ID that no longer resolves is a soft error: logged, skipped,
//! and the rest of the materialization continues.

use crate::consolidate::container::Container;
use crate::core::types::{Camouflage, ForceId};
use crate::force::graph::ForceGraph;

/// Delete every existing force and rebuild the forest from `roots`.
pub fn rebuild(graph: &mut ForceGraph, roots: &[Container]) {
    graph.remove_all_forces();
    for root in roots {
        let mut stack: Vec<(&Container, Option<ForceId>)> = vec![(root, None)];
        while let Some((container, parent)) = stack.pop() {
            let camouflage = graph
                .player(container.owner)
                .map(|p| p.camouflage.clone())
                .unwrap_or_else(Camouflage::default);
            let name = container
                .name
                .clone()
                .unwrap_or_else(|| format!("Force {}", container.id + 1));

            let force = graph.add_force(name, container.owner, camouflage, parent);

            for &entity in &container.entities {
                if graph.entity(entity).is_some() {
                    graph.attach_entity(force, entity);
                } else {
                    tracing::error!(
                        "Entity {:?} not found in any source during materialization; skipping",
                        entity
                    );
                }
            }

            // Reversed push keeps child creation in declaration order
            for child in container.children.iter().rev() {
                stack.push((child, Some(force)));
            }
        }
    }
}
