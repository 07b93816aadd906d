use thiserror::Error;

use crate::core::types::{EntityId, ForceId};

/// Errors surfaced by consolidation.
///
/// All variants are structural and fatal: the consolidation attempt is
/// aborted and the live graph is left untouched. Missing-reference problems
/// (unresolvable entity IDs, failed stat conversions) are soft errors that
/// are logged and skipped instead of surfacing here.
#[derive(Error, Debug)]
pub enum MusterError {
    #[error("Cycle detected in force parent/child graph at force {0:?}")]
    CycleDetected(ForceId),

    #[error("Entity {entity:?} assigned to both force {first:?} and force {second:?}")]
    DuplicateEntityAssignment {
        entity: EntityId,
        first: ForceId,
        second: ForceId,
    },
}

pub type Result<T> = std::result::Result<T, MusterError>;
