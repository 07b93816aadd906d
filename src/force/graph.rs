//! The live force graph: forces, entity registry, player registry
//!
//! Traversals use explicit work stacks with visited sets so corrupt input
//! (cyclic parent/child links) cannot hang or overflow them; cycle *rejection*
//! is the KeepCurrent strategy's job, termination is the graph's.

use ahash::{AHashMap, AHashSet};

use crate::core::types::{Camouflage, EntityId, ForceId, PlayerId, TeamId};
use crate::force::entity::CombatEntity;
use crate::force::node::ForceNode;
use crate::force::player::Player;

#[derive(Debug, Default)]
pub struct ForceGraph {
    forces: AHashMap<ForceId, ForceNode>,
    /// Top-level force IDs in insertion order
    top_level: Vec<ForceId>,
    entities: AHashMap<EntityId, CombatEntity>,
    players: AHashMap<PlayerId, Player>,
    next_force_id: u32,
}

impl ForceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // === Players ===

    pub fn add_player(&mut self, player: Player) {
        self.players.insert(player.id, player);
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn team_of(&self, player: PlayerId) -> Option<TeamId> {
        self.players.get(&player).map(|p| p.team)
    }

    /// Player IDs on a team, sorted for deterministic iteration
    pub fn players_on_team(&self, team: TeamId) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self
            .players
            .values()
            .filter(|p| p.team == team)
            .map(|p| p.id)
            .collect();
        ids.sort();
        ids
    }

    // === Entities ===

    pub fn add_entity(&mut self, entity: CombatEntity) {
        self.entities.insert(entity.id, entity);
    }

    /// Resolve an entity ID against the unit registry ("from all sources")
    pub fn entity(&self, id: EntityId) -> Option<&CombatEntity> {
        self.entities.get(&id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    // === Forces ===

    /// Insert a new force, wiring parent/child links. ID assignment is the
    /// graph's responsibility; callers never pick IDs.
    pub fn add_force(
        &mut self,
        name: impl Into<String>,
        owner: PlayerId,
        camouflage: Camouflage,
        parent: Option<ForceId>,
    ) -> ForceId {
        let id = ForceId(self.next_force_id);
        self.next_force_id += 1;

        self.forces.insert(
            id,
            ForceNode {
                id,
                name: name.into(),
                owner,
                camouflage,
                parent,
                sub_forces: Vec::new(),
                entities: Vec::new(),
            },
        );

        match parent {
            Some(parent_id) => {
                if let Some(parent_node) = self.forces.get_mut(&parent_id) {
                    parent_node.sub_forces.push(id);
                }
            }
            None => self.top_level.push(id),
        }

        id
    }

    /// Add an entity ID to a force's direct member list
    pub fn attach_entity(&mut self, force: ForceId, entity: EntityId) {
        if let Some(node) = self.forces.get_mut(&force) {
            node.entities.push(entity);
        }
    }

    pub fn force(&self, id: ForceId) -> Option<&ForceNode> {
        self.forces.get(&id)
    }

    /// Mutable node access. The graph is an external model and tolerates
    /// arbitrary edits, including ones that corrupt parent/child links;
    /// consolidation guards against such corruption rather than this type.
    pub fn force_mut(&mut self, id: ForceId) -> Option<&mut ForceNode> {
        self.forces.get_mut(&id)
    }

    pub fn top_level_forces(&self) -> &[ForceId] {
        &self.top_level
    }

    pub fn force_count(&self) -> usize {
        self.forces.len()
    }

    /// Every force ID in the graph, sorted, reachable or not
    pub fn force_ids(&self) -> Vec<ForceId> {
        let mut ids: Vec<ForceId> = self.forces.keys().copied().collect();
        ids.sort();
        ids
    }

    /// All force IDs reachable under `root` (excluding `root`), pre-order.
    /// Revisits are skipped so cyclic links terminate.
    pub fn sub_force_ids_recursive(&self, root: ForceId) -> Vec<ForceId> {
        let mut out = Vec::new();
        let mut visited = AHashSet::new();
        visited.insert(root);

        let mut stack: Vec<ForceId> = match self.forces.get(&root) {
            Some(node) => node.sub_forces.iter().rev().copied().collect(),
            None => return out,
        };

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            if let Some(node) = self.forces.get(&id) {
                out.push(id);
                for &child in node.sub_forces.iter().rev() {
                    stack.push(child);
                }
            }
        }
        out
    }

    /// All entity IDs reachable under `root`, in pre-order of their forces.
    /// Preserves ordering and any duplicates present in the source graph.
    pub fn entity_ids_recursive(&self, root: ForceId) -> Vec<EntityId> {
        let mut out = Vec::new();
        if let Some(node) = self.forces.get(&root) {
            out.extend_from_slice(&node.entities);
        }
        for id in self.sub_force_ids_recursive(root) {
            if let Some(node) = self.forces.get(&id) {
                out.extend_from_slice(&node.entities);
            }
        }
        out
    }

    /// Drop the entire force forest. Entities and players are untouched.
    pub fn remove_all_forces(&mut self) {
        self.forces.clear();
        self.top_level.clear();
    }
}
