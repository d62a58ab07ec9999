//! Disjoint-set forests (union-find)
//!
//! - `UnionBySizeCompressingDisjointSets`: union by size with full path compression
//! - `QuickFindDisjointSets`: every slot stores its set id; O(n) union
//!
//! Set identifiers returned by `find_set` are only meaningful for comparison
//! against other `find_set` results on the same forest.

pub mod quick_find;
pub mod union_by_size;

pub use quick_find::QuickFindDisjointSets;
pub use union_by_size::UnionBySizeCompressingDisjointSets;

use crate::error::Result;

/// Operations the minimum spanning tree solver needs from a forest
pub trait DisjointSets<T> {
    /// Create a new singleton set containing `item`.
    ///
    /// Fails with `AlreadyPresent` if `item` already belongs to a set.
    fn make_set(&mut self, item: T) -> Result<()>;

    /// Identifier of the set containing `item`
    fn find_set(&mut self, item: &T) -> Result<usize>;

    /// Merge the sets containing the two items.
    ///
    /// Returns `false` when they were already in the same set.
    fn union(&mut self, item1: &T, item2: &T) -> Result<bool>;
}
