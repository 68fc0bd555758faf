//! Text rendering of inventory items.
//!
//! One table formatter serves every listing (the update/delete preview and the
//! full report); search uses the single-line summary.

use core::fmt::Write as _;

use crate::item::InventoryItem;

/// Shown instead of an empty table.
pub const EMPTY_INVENTORY: &str = "No products in inventory.";

const BORDER: &str = "+------------------+----------------+----------------------+";

/// Render `items` as a fixed-width three-column table under `heading`.
///
/// Output ends with a newline. Long names overflow their column rather than
/// being truncated.
pub fn render_table(heading: &str, items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return format!("{EMPTY_INVENTORY}\n");
    }

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n{heading}");
    let _ = writeln!(out, "{BORDER}");
    let _ = writeln!(out, "| {:<16} | {:<14} | {:<20} |", "Rice Type", "Quantity", "Reorder Level");
    let _ = writeln!(out, "{BORDER}");
    for item in items {
        let _ = writeln!(
            out,
            "| {:<16} | {:<14} | {:<20} |",
            item.name().as_str(),
            item.quantity().get(),
            item.reorder_level().get(),
        );
    }
    let _ = writeln!(out, "{BORDER}");
    out
}

/// One-line description of a single item (no trailing newline).
pub fn render_summary(item: &InventoryItem) -> String {
    format!(
        "Found: {} - Quantity: {} sacks, Reorder Level: {} sacks",
        item.name(),
        item.quantity(),
        item.reorder_level(),
    )
}
