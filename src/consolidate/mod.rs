//! Force consolidation: restructure the live force forest
//!
//! One consolidation call is a single transaction: a strategy computes a
//! fresh `Container` forest from a read-only view of the graph, and only
//! then is the old forest deleted and the new one materialized. A structural
//! failure during strategy execution therefore never leaves a partially
//! rebuilt graph.
//!
//! Strategies:
//! - `Balanced` / `SortValid`: team-balanced redistribution under capacity
//!   limits (one parametrized algorithm, two selectors)
//! - `Flatten`: one top-level force per entity-holding force
//! - `KeepCurrent`: exact topology reconstruction with cycle and
//!   duplicate-assignment guards
//! - `Singleton`: one top-level force per entity

pub mod balanced;
pub mod container;
pub mod flatten;
pub mod keep;
pub mod materialize;
pub mod representation;
pub mod singleton;

pub use container::Container;
pub use representation::{extract, ForceRepresentation};

use crate::core::config::{ConsolidateConfig, StrategyKind};
use crate::core::error::Result;
use crate::force::graph::ForceGraph;

/// Run one consolidation pass over the live graph.
///
/// On `Err` the graph is guaranteed untouched.
pub fn consolidate(graph: &mut ForceGraph, config: &ConsolidateConfig) -> Result<()> {
    let roots = match config.strategy {
        StrategyKind::Balanced | StrategyKind::SortValid => balanced::build(graph, config),
        StrategyKind::Flatten => flatten::build(graph),
        StrategyKind::KeepCurrent => keep::build(graph)?,
        StrategyKind::Singleton => singleton::build(graph),
    };
    materialize::rebuild(graph, &roots);
    Ok(())
}
