use crate::bail_present;
use crate::error::{GraphError, Result};
use crate::priority_queue::{check_priority, ExtrinsicMinPq};
use std::fmt::Debug;

/// Unsorted list queue: O(1) add, O(n) everything else.
///
/// Used to cross-check `ArrayHeapMinPq` and as an injectable queue for small graphs.
#[derive(Debug, Clone)]
pub struct NaiveMinPq<T> {
    entries: Vec<(T, f64)>,
}

impl<T> Default for NaiveMinPq<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: PartialEq + Debug> NaiveMinPq<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.entries.iter().position(|(tracked, _)| tracked == item)
    }

    fn min_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &(_, priority))| match best {
                Some((_, lowest)) if lowest <= priority => best,
                _ => Some((i, priority)),
            })
            .map(|(i, _)| i)
    }
}

impl<T: PartialEq + Debug> ExtrinsicMinPq<T> for NaiveMinPq<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<()> {
        check_priority(priority)?;
        if self.index_of(&item).is_some() {
            bail_present!("priority queue add", item);
        }
        self.entries.push((item, priority));
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    fn peek_min(&self) -> Result<&T> {
        self.min_index()
            .map(|i| &self.entries[i].0)
            .ok_or_else(|| GraphError::empty("priority queue"))
    }

    fn remove_min(&mut self) -> Result<T> {
        let i = self
            .min_index()
            .ok_or_else(|| GraphError::empty("priority queue"))?;
        Ok(self.entries.swap_remove(i).0)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        check_priority(priority)?;
        let i = self
            .index_of(item)
            .ok_or_else(|| GraphError::not_found("priority queue change_priority", item))?;
        self.entries[i].1 = priority;
        Ok(())
    }

    fn size(&self) -> usize {
        self.entries.len()
    }
}
