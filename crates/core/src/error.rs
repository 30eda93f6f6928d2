//! Domain error model.

use thiserror::Error;

use crate::id::PartId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// missing records, stock rules). Presentation concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No record carries the requested identifier.
    #[error("part {0} not found")]
    NotFound(PartId),

    /// A sale asked for more units than are on hand.
    #[error("insufficient stock for part {part_id}: requested {requested}, available {available}")]
    InsufficientStock {
        part_id: PartId,
        requested: u32,
        available: u32,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(part_id: PartId) -> Self {
        Self::NotFound(part_id)
    }

    pub fn insufficient_stock(part_id: PartId, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            part_id,
            requested,
            available,
        }
    }

    /// True for the "unknown id" outcome, as opposed to a rule violation.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
