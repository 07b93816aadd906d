pub mod config;
pub mod error;
pub mod types;

pub use config::{ConsolidateConfig, StrategyKind};
pub use error::{MusterError, Result};
pub use types::{Camouflage, EntityId, ForceId, PlayerId, TeamId};
