//! Muster - force consolidation and formation conversion for auto-resolve battles

pub mod consolidate;
pub mod core;
pub mod force;
pub mod formation;

pub use crate::core::error::{MusterError, Result};
