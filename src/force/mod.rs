//! Live force/entity graph model
//!
//! The graph is the external collaborator consolidation operates on: a forest
//! of forces (players -> top-level forces -> sub-forces -> entities) plus the
//! entity and player registries needed to resolve IDs. Consolidation rewrites
//! the force forest wholesale; entities and players are never mutated by it.

pub mod entity;
pub mod graph;
pub mod node;
pub mod player;

pub use entity::CombatEntity;
pub use graph::ForceGraph;
pub use node::ForceNode;
pub use player::Player;
