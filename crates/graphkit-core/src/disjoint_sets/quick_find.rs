use crate::bail_present;
use crate::disjoint_sets::DisjointSets;
use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Forest where each slot records its set id directly.
///
/// `find_set` is O(1); `union` relabels one whole set in O(n).
#[derive(Debug, Clone)]
pub struct QuickFindDisjointSets<T> {
    set_ids: Vec<usize>,
    slots: HashMap<T, usize>,
}

impl<T> Default for QuickFindDisjointSets<T> {
    fn default() -> Self {
        Self {
            set_ids: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash + Debug> QuickFindDisjointSets<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.set_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set_ids.is_empty()
    }

    /// Number of distinct sets
    pub fn set_count(&self) -> usize {
        self.set_ids
            .iter()
            .enumerate()
            .filter(|&(slot, &id)| slot == id)
            .count()
    }

    fn set_id(&self, item: &T, context: &str) -> Result<usize> {
        self.slots
            .get(item)
            .map(|&slot| self.set_ids[slot])
            .ok_or_else(|| GraphError::not_found(context, item))
    }
}

impl<T: Eq + Hash + Debug> DisjointSets<T> for QuickFindDisjointSets<T> {
    fn make_set(&mut self, item: T) -> Result<()> {
        if self.slots.contains_key(&item) {
            bail_present!("make_set", item);
        }
        let slot = self.set_ids.len();
        self.slots.insert(item, slot);
        self.set_ids.push(slot);
        Ok(())
    }

    fn find_set(&mut self, item: &T) -> Result<usize> {
        self.set_id(item, "find_set")
    }

    fn union(&mut self, item1: &T, item2: &T) -> Result<bool> {
        let id1 = self.set_id(item1, "union")?;
        let id2 = self.set_id(item2, "union")?;
        if id1 == id2 {
            return Ok(false);
        }
        for id in self.set_ids.iter_mut().filter(|id| **id == id1) {
            *id = id2;
        }
        Ok(true)
    }
}
