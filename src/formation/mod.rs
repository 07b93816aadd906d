//! Entity-to-formation conversion for the auto-resolve simulation
//!
//! Once the force forest is consolidated, each top-level force (or each
//! entity, for the per-entity variant) is collapsed into one abstract
//! combat unit the simulation can consume.

pub mod converter;
pub mod role;
pub mod stats;

pub use converter::{convert_all, entity_to_formation, force_to_formation, Formation, SimUnit};
pub use role::Role;
pub use stats::{BasicStatConverter, CombatStats, DamageVector, StatConverter};
