//! `autoshop-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_by_id, find_by_id_mut};
pub use error::{DomainError, DomainResult};
pub use id::{PartId, PartIdSequence};
