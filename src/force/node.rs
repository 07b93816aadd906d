//! Force tree nodes

use serde::{Deserialize, Serialize};

use crate::core::types::{Camouflage, EntityId, ForceId, PlayerId};

/// A force in the live graph
///
/// On input a force may hold both sub-forces and direct entities (mixed);
/// consolidation output normalizes this so a force is either composite
/// (sub-forces only) or leaf (entities only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForceNode {
    pub id: ForceId,
    pub name: String,
    pub owner: PlayerId,
    pub camouflage: Camouflage,
    pub parent: Option<ForceId>,
    pub sub_forces: Vec<ForceId>,
    pub entities: Vec<EntityId>,
}

impl ForceNode {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// No entities and no sub-forces; contributes nothing to consolidation
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty() && self.sub_forces.is_empty()
    }
}
