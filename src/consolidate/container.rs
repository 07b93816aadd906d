//! Transient container tree built during balancing
//!
//! Containers exist only between strategy execution and materialization;
//! nothing retains them afterwards.

use crate::core::types::{EntityId, PlayerId, TeamId};

/// One node of the intermediate force tree
#[derive(Debug, Clone)]
pub struct Container {
    /// Synthetic ID, unique within one consolidation run
    pub id: u32,
    /// Display name for the force this becomes; `None` gets a generated name
    pub name: Option<String>,
    /// Ancestry string ("Alpha > Bravo") carried by topology-preserving runs
    pub breadcrumb: Option<String>,
    pub team: TeamId,
    pub owner: PlayerId,
    pub entities: Vec<EntityId>,
    pub children: Vec<Container>,
}

impl Container {
    pub fn new(id: u32, team: TeamId, owner: PlayerId) -> Self {
        Self {
            id,
            name: None,
            breadcrumb: None,
            team,
            owner,
            entities: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && !self.entities.is_empty()
    }

    pub fn is_top(&self) -> bool {
        !self.children.is_empty() && self.entities.is_empty()
    }

    /// Entity count over the whole subtree
    pub fn descendant_entity_count(&self) -> usize {
        self.entities.len()
            + self
                .children
                .iter()
                .map(|c| c.descendant_entity_count())
                .sum::<usize>()
    }
}

/// Hands out synthetic container IDs for one consolidation run
#[derive(Debug, Default)]
pub struct ContainerIds {
    next: u32,
}

impl ContainerIds {
    pub fn next(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}
