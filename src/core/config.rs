//! Consolidation configuration
//!
//! Capacities are signed so that a negative value can mean "unbounded",
//! matching the strategy contract. The balanced presets come from the
//! formation rules the downstream simulation enforces.

/// Maximum entities per sub-force under the balanced strategies
pub const MAX_ENTITIES_IN_SUB_FORCE: i32 = 6;

/// Maximum entities per top-level force under the balanced strategies
pub const MAX_ENTITIES_IN_TOP_LEVEL_FORCE: i32 = 20;

/// Which consolidation strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Rebalance all entities by team into capacity-bounded forces
    Balanced,
    /// Same algorithm as Balanced; kept as a distinct selector because
    /// scenarios reference it by name
    SortValid,
    /// One top-level force per entity-holding force, single sub-force each
    Flatten,
    /// Reconstruct the existing topology exactly, with structural guards
    KeepCurrent,
    /// One top-level force per individual entity
    Singleton,
}

/// Configuration for one consolidation run
#[derive(Debug, Clone)]
pub struct ConsolidateConfig {
    pub strategy: StrategyKind,
    /// Max entities per sub-force; negative = unbounded
    pub max_entities_in_sub_force: i32,
    /// Max entities per top-level force; negative = unbounded
    pub max_entities_in_top_level_force: i32,
}

impl ConsolidateConfig {
    pub fn balanced() -> Self {
        Self {
            strategy: StrategyKind::Balanced,
            max_entities_in_sub_force: MAX_ENTITIES_IN_SUB_FORCE,
            max_entities_in_top_level_force: MAX_ENTITIES_IN_TOP_LEVEL_FORCE,
        }
    }

    pub fn sort_valid() -> Self {
        Self {
            strategy: StrategyKind::SortValid,
            ..Self::balanced()
        }
    }

    pub fn flatten() -> Self {
        Self::unbounded(StrategyKind::Flatten)
    }

    pub fn keep_current() -> Self {
        Self::unbounded(StrategyKind::KeepCurrent)
    }

    pub fn singleton() -> Self {
        Self::unbounded(StrategyKind::Singleton)
    }

    fn unbounded(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            max_entities_in_sub_force: -1,
            max_entities_in_top_level_force: -1,
        }
    }

    /// Sub-force capacity as an option; `None` means unbounded
    pub fn sub_force_cap(&self) -> Option<usize> {
        cap(self.max_entities_in_sub_force)
    }

    /// Top-level force capacity as an option; `None` means unbounded
    pub fn top_level_cap(&self) -> Option<usize> {
        cap(self.max_entities_in_top_level_force)
    }
}

fn cap(raw: i32) -> Option<usize> {
    if raw < 0 {
        None
    } else {
        Some(raw as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_capacity_is_unbounded() {
        let config = ConsolidateConfig::flatten();
        assert_eq!(config.sub_force_cap(), None);
        assert_eq!(config.top_level_cap(), None);
    }

    #[test]
    fn test_balanced_preset_capacities() {
        let config = ConsolidateConfig::balanced();
        assert_eq!(config.sub_force_cap(), Some(6));
        assert_eq!(config.top_level_cap(), Some(20));
    }
}
