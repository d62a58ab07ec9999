use crate::bail_present;
use crate::error::{GraphError, Result};
use crate::priority_queue::{check_priority, ExtrinsicMinPq};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Slot number of the root. Slot `i` has children `2i` and `2i + 1`.
const START_INDEX: usize = 1;

/// An item together with its current priority
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityNode<T> {
    pub item: T,
    pub priority: f64,
}

/// Binary min-heap with decrease/increase-key.
///
/// Slots are numbered from `START_INDEX`; slot `s` lives at `items[s - START_INDEX]`.
/// `positions` maps every tracked item to its slot and is rewritten on every
/// swap, so `items[positions[x] - START_INDEX].item == x` always holds.
#[derive(Debug, Clone)]
pub struct ArrayHeapMinPq<T> {
    items: Vec<PriorityNode<T>>,
    positions: HashMap<T, usize>,
}

impl<T> Default for ArrayHeapMinPq<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> ArrayHeapMinPq<T>
where
    T: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Priority currently recorded for `item`, if tracked
    pub fn priority_of(&self, item: &T) -> Option<f64> {
        self.positions
            .get(item)
            .map(|&slot| self.node(slot).priority)
    }

    fn node(&self, slot: usize) -> &PriorityNode<T> {
        &self.items[slot - START_INDEX]
    }

    fn last_slot(&self) -> usize {
        self.items.len() + START_INDEX - 1
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a - START_INDEX, b - START_INDEX);
        for slot in [a, b] {
            let item = &self.items[slot - START_INDEX].item;
            if let Some(position) = self.positions.get_mut(item) {
                *position = slot;
            }
        }
    }

    fn percolate_up(&mut self, mut slot: usize) {
        while slot > START_INDEX {
            let parent = slot / 2;
            if self.node(parent).priority <= self.node(slot).priority {
                break;
            }
            self.swap(parent, slot);
            slot = parent;
        }
    }

    fn percolate_down(&mut self, mut slot: usize) {
        let last = self.last_slot();
        while 2 * slot <= last {
            let left = 2 * slot;
            let right = left + 1;
            let mut smallest = left;
            if right <= last && self.node(right).priority < self.node(left).priority {
                smallest = right;
            }
            if self.node(slot).priority <= self.node(smallest).priority {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    /// Heap order and side-table agreement, checked by tests after each mutation
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        if self.positions.len() != self.items.len() {
            return false;
        }
        (START_INDEX..=self.last_slot()).all(|slot| {
            let node = self.node(slot);
            let ordered = slot == START_INDEX || self.node(slot / 2).priority <= node.priority;
            ordered && self.positions.get(&node.item) == Some(&slot)
        })
    }
}

impl<T> ExtrinsicMinPq<T> for ArrayHeapMinPq<T>
where
    T: Eq + Hash + Clone + Debug,
{
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        check_priority(priority)?;
        if self.positions.contains_key(&item) {
            bail_present!("priority queue add", item);
        }
        self.positions
            .insert(item.clone(), self.items.len() + START_INDEX);
        self.items.push(PriorityNode { item, priority });
        self.percolate_up(self.last_slot());
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    fn peek_min(&self) -> Result<&T> {
        self.items
            .first()
            .map(|node| &node.item)
            .ok_or_else(|| GraphError::empty("priority queue"))
    }

    fn remove_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(GraphError::empty("priority queue"));
        }
        self.swap(START_INDEX, self.last_slot());
        let min = self
            .items
            .pop()
            .ok_or_else(|| GraphError::empty("priority queue"))?;
        self.positions.remove(&min.item);
        if !self.items.is_empty() {
            self.percolate_down(START_INDEX);
        }
        Ok(min.item)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        check_priority(priority)?;
        let slot = *self
            .positions
            .get(item)
            .ok_or_else(|| GraphError::not_found("priority queue change_priority", item))?;
        let node = &mut self.items[slot - START_INDEX];
        let old_priority = node.priority;
        node.priority = priority;
        if priority < old_priority {
            self.percolate_up(slot);
        } else {
            self.percolate_down(slot);
        }
        Ok(())
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}
