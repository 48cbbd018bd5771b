//! Entity trait: records whose identity outlives changes to their contents.

/// A warehouse keeps its id through renames and stock movements; that id is
/// what distinguishes it from another warehouse holding identical stock.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
