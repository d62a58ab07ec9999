use crate::bail_present;
use crate::disjoint_sets::DisjointSets;
use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Union-find over arbitrary hashable items.
///
/// `pointers[slot]` is either the parent's slot, or `-size` when `slot` is a root.
#[derive(Debug, Clone)]
pub struct UnionBySizeCompressingDisjointSets<T> {
    pointers: Vec<isize>,
    slots: HashMap<T, usize>,
}

impl<T> Default for UnionBySizeCompressingDisjointSets<T> {
    fn default() -> Self {
        Self {
            pointers: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl<T> UnionBySizeCompressingDisjointSets<T>
where
    T: Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items that have been given a set
    pub fn len(&self) -> usize {
        self.pointers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pointers.is_empty()
    }

    /// Number of distinct sets
    pub fn set_count(&self) -> usize {
        self.pointers.iter().filter(|&&p| p < 0).count()
    }

    /// Size of the set containing `item`
    pub fn set_size(&mut self, item: &T) -> Result<usize> {
        let root = self.find_set(item)?;
        Ok(self.pointers[root].unsigned_abs())
    }

    fn slot_of(&self, item: &T, context: &str) -> Result<usize> {
        self.slots
            .get(item)
            .copied()
            .ok_or_else(|| GraphError::not_found(context, item))
    }

    fn find_root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.pointers[root] >= 0 {
            root = self.pointers[root] as usize;
        }

        let mut current = slot;
        while self.pointers[current] >= 0 {
            let parent = self.pointers[current] as usize;
            self.pointers[current] = root as isize;
            current = parent;
        }

        root
    }

    /// Every root's recorded size matches the number of slots beneath it
    #[cfg(test)]
    pub(crate) fn sizes_are_consistent(&mut self) -> bool {
        let mut counts: HashMap<usize, isize> = HashMap::new();
        for slot in 0..self.pointers.len() {
            *counts.entry(self.find_root(slot)).or_default() += 1;
        }
        counts
            .into_iter()
            .all(|(root, count)| self.pointers[root] == -count)
    }
}

impl<T> DisjointSets<T> for UnionBySizeCompressingDisjointSets<T>
where
    T: Eq + Hash + Debug,
{
    fn make_set(&mut self, item: T) -> Result<()> {
        if self.slots.contains_key(&item) {
            bail_present!("make_set", item);
        }
        self.slots.insert(item, self.pointers.len());
        self.pointers.push(-1);
        Ok(())
    }

    fn find_set(&mut self, item: &T) -> Result<usize> {
        let slot = self.slot_of(item, "find_set")?;
        Ok(self.find_root(slot))
    }

    fn union(&mut self, item1: &T, item2: &T) -> Result<bool> {
        let slot1 = self.slot_of(item1, "union")?;
        let slot2 = self.slot_of(item2, "union")?;
        let root1 = self.find_root(slot1);
        let root2 = self.find_root(slot2);
        if root1 == root2 {
            return Ok(false);
        }

        let size1 = -self.pointers[root1];
        let size2 = -self.pointers[root2];
        // On a tie the first item's root goes under the second's
        if size1 <= size2 {
            self.pointers[root1] = root2 as isize;
            self.pointers[root2] = -(size1 + size2);
        } else {
            self.pointers[root2] = root1 as isize;
            self.pointers[root1] = -(size1 + size2);
        }
        Ok(true)
    }
}
