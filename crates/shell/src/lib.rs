//! `autoshop-shell`
//!
//! **Responsibility:** terminal presentation layer for the two programs.
//!
//! This crate provides:
//! - the inventory menu loop (add / sell / order / list)
//! - the calculator keypad loop
//!
//! Both sessions are **thin shells**: they parse what the user typed, call the domain
//! crates and render the outcome. All state lives in the domain types.

pub mod calculator;
pub mod config;
pub mod console;
pub mod inventory;

pub use calculator::CalculatorSession;
pub use config::ShellConfig;
pub use console::Console;
pub use inventory::InventorySession;
