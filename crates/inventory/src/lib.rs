//! Auto-parts inventory domain module.
//!
//! This crate contains the business rules for the parts ledger, implemented purely as
//! deterministic domain logic (no IO, no presentation).

pub mod ledger;
pub mod part;

pub use ledger::{InventoryLedger, SAMPLE_CATALOGUE};
pub use part::{Category, Part, UnitPrice};
