//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An inventory record keeps its identity while its quantities change; the
/// identity is whatever key the owning store deduplicates on.
pub trait Entity {
    /// Identity key.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identity key.
    fn id(&self) -> &Self::Id;
}
