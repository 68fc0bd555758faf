//! Inventory domain module.
//!
//! This crate contains business rules for the rice-sack inventory, implemented
//! purely as deterministic domain logic (no IO, no terminal, no storage beyond
//! process memory).

pub mod item;
pub mod report;
pub mod store;

pub use item::{AddItem, InventoryItem, ItemKey, ItemName, SackCount, UpdateItem};
pub use report::{EMPTY_INVENTORY, render_summary, render_table};
pub use store::{InMemoryInventoryStore, InventoryStore};
