//! Inventory domain module.
//!
//! This crate contains business rules for the shoe inventory, implemented purely
//! as deterministic domain logic (no IO, no terminal, no storage).

pub mod inventory;
pub mod record;

pub use inventory::{Inventory, InventoryValuationSummary};
pub use record::{NewShoe, ShoeRecord, parse_count};
