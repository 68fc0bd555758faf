use sunrise_core::{DomainError, DomainResult, Entity};

/// Display name of a rice type, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Trim surrounding whitespace and reject empty names.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive uniqueness key for this name.
    pub fn key(&self) -> ItemKey {
        ItemKey::from_name(&self.0)
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercased, trimmed form of a name. Two names collide iff their keys are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(String);

impl ItemKey {
    /// Build a lookup key from any user-supplied text (no emptiness check).
    pub fn from_name(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Number of sacks; always at least [`SackCount::MIN`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SackCount(u64);

impl SackCount {
    pub const MIN: u64 = 1;

    pub fn new(value: u64) -> DomainResult<Self> {
        if value < Self::MIN {
            return Err(DomainError::InvalidSackCount(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for SackCount {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl core::fmt::Display for SackCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: one stocked rice type.
///
/// The reorder level is informational; nothing reacts when `quantity` drops below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    key: ItemKey,
    name: ItemName,
    quantity: SackCount,
    reorder_level: SackCount,
}

impl InventoryItem {
    pub fn new(name: ItemName, quantity: SackCount, reorder_level: SackCount) -> Self {
        Self {
            key: name.key(),
            name,
            quantity,
            reorder_level,
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn quantity(&self) -> SackCount {
        self.quantity
    }

    pub fn reorder_level(&self) -> SackCount {
        self.reorder_level
    }

    /// Replace both counts in place. The name (and so the key) never changes.
    pub(crate) fn restock(&mut self, quantity: SackCount, reorder_level: SackCount) {
        self.quantity = quantity;
        self.reorder_level = reorder_level;
    }
}

impl Entity for InventoryItem {
    type Id = ItemKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

/// Input for [`crate::InventoryStore::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub name: String,
    pub quantity: SackCount,
    pub reorder_level: SackCount,
}

/// Input for [`crate::InventoryStore::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItem {
    pub name: String,
    pub quantity: SackCount,
    pub reorder_level: SackCount,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sacks(n: u64) -> SackCount {
        SackCount::new(n).unwrap()
    }

    #[test]
    fn name_is_trimmed() {
        let name = ItemName::parse("  Jasmine \t").unwrap();
        assert_eq!(name.as_str(), "Jasmine");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(ItemName::parse(""), Err(DomainError::EmptyName));
        assert_eq!(ItemName::parse("   \t "), Err(DomainError::EmptyName));
    }

    #[test]
    fn key_ignores_case_and_surrounding_whitespace() {
        let a = ItemName::parse("Jasmine").unwrap();
        assert_eq!(a.key(), ItemKey::from_name(" JASMINE "));
        assert_eq!(a.key().as_str(), "jasmine");
    }

    #[test]
    fn zero_sacks_is_invalid() {
        assert_eq!(SackCount::new(0), Err(DomainError::InvalidSackCount(0)));
        assert_eq!(SackCount::try_from(1).map(SackCount::get), Ok(1));
    }

    #[test]
    fn item_identity_is_its_key() {
        let item = InventoryItem::new(ItemName::parse("Basmati").unwrap(), sacks(5), sacks(2));
        assert_eq!(Entity::id(&item).as_str(), "basmati");
        assert_eq!(item.name().as_str(), "Basmati");
    }

    #[test]
    fn restock_keeps_name() {
        let mut item = InventoryItem::new(ItemName::parse("Basmati").unwrap(), sacks(5), sacks(2));
        item.restock(sacks(40), sacks(8));
        assert_eq!(item.quantity(), sacks(40));
        assert_eq!(item.reorder_level(), sacks(8));
        assert_eq!(item.name().as_str(), "Basmati");
    }
}
