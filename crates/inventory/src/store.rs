//! Inventory storage.

use std::collections::{BTreeMap, HashMap};

use sunrise_core::{DomainError, DomainResult, Entity};

use crate::item::{AddItem, InventoryItem, ItemKey, ItemName, UpdateItem};

/// Identity the store deduplicates on.
type ItemId = <InventoryItem as Entity>::Id;

/// Inventory store abstraction.
///
/// Items are unique by case-insensitive name and listed in insertion order.
pub trait InventoryStore {
    /// Insert a new item.
    fn add(&mut self, cmd: AddItem) -> DomainResult<&InventoryItem>;

    /// Look an item up by name (case-insensitive).
    fn find_by_name(&self, name: &str) -> DomainResult<&InventoryItem>;

    /// Replace an existing item's quantity and reorder level.
    fn update(&mut self, cmd: UpdateItem) -> DomainResult<&InventoryItem>;

    /// Remove an item, returning it.
    fn delete(&mut self, name: &str) -> DomainResult<InventoryItem>;

    /// Snapshot of all items in insertion order.
    fn list_all(&self) -> Vec<InventoryItem>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether an item with this name (case-insensitive) exists.
    fn contains(&self, name: &str) -> bool {
        self.find_by_name(name).is_ok()
    }
}

/// Process-scoped store: an insertion-ordered map from lowercased name to item.
///
/// `entries` is keyed by a monotonically increasing insertion sequence so that
/// iteration order survives deletes; `index` maps each key to its sequence.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    entries: BTreeMap<u64, InventoryItem>,
    index: HashMap<ItemId, u64>,
    next_seq: u64,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn seq_of(&self, name: &str) -> DomainResult<u64> {
        self.index
            .get(&ItemKey::from_name(name))
            .copied()
            .ok_or_else(|| DomainError::not_found(name.trim()))
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn add(&mut self, cmd: AddItem) -> DomainResult<&InventoryItem> {
        let item = InventoryItem::new(ItemName::parse(&cmd.name)?, cmd.quantity, cmd.reorder_level);
        if self.index.contains_key(item.id()) {
            return Err(DomainError::duplicate(item.name().as_str()));
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(item.id().clone(), seq);

        let item = self.entries.entry(seq).or_insert(item);
        Ok(&*item)
    }

    fn find_by_name(&self, name: &str) -> DomainResult<&InventoryItem> {
        let seq = self.seq_of(name)?;
        self.entries
            .get(&seq)
            .ok_or_else(|| DomainError::not_found(name.trim()))
    }

    fn update(&mut self, cmd: UpdateItem) -> DomainResult<&InventoryItem> {
        let seq = self.seq_of(&cmd.name)?;
        let item = self
            .entries
            .get_mut(&seq)
            .ok_or_else(|| DomainError::not_found(cmd.name.trim()))?;
        item.restock(cmd.quantity, cmd.reorder_level);
        Ok(&*item)
    }

    fn delete(&mut self, name: &str) -> DomainResult<InventoryItem> {
        let seq = self.seq_of(name)?;
        let item = self
            .entries
            .remove(&seq)
            .ok_or_else(|| DomainError::not_found(name.trim()))?;
        self.index.remove(item.id());
        Ok(item)
    }

    fn list_all(&self) -> Vec<InventoryItem> {
        self.entries.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
