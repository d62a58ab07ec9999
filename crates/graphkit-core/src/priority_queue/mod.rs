//! Extrinsic min-priority queues
//!
//! An extrinsic queue tracks items supplied by the caller and lets the caller
//! change the priority of an item already in the queue (decrease/increase-key):
//! - `ArrayHeapMinPq`: binary heap with an item -> slot side table
//! - `NaiveMinPq`: linear-scan reference implementation
//!
//! Items with equal priority come out in an unspecified order.

pub mod array_heap;
pub mod naive;

pub use array_heap::ArrayHeapMinPq;
pub use naive::NaiveMinPq;

use crate::error::{GraphError, Result};

/// Operations shared by every min-priority queue the solvers can use
pub trait ExtrinsicMinPq<T> {
    /// Add an item with the given priority.
    ///
    /// Fails with `AlreadyPresent` if the item is already tracked.
    fn add(&mut self, item: T, priority: f64) -> Result<()>;

    /// Whether the item is currently tracked
    fn contains(&self, item: &T) -> bool;

    /// The item with the smallest priority, without removing it
    fn peek_min(&self) -> Result<&T>;

    /// Remove and return the item with the smallest priority
    fn remove_min(&mut self) -> Result<T>;

    /// Replace the priority of a tracked item.
    ///
    /// Fails with `NotFound` if the item is not tracked.
    fn change_priority(&mut self, item: &T, priority: f64) -> Result<()>;

    /// Number of tracked items
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

pub(crate) fn check_priority(priority: f64) -> Result<()> {
    if priority.is_nan() {
        return Err(GraphError::InvalidPriority);
    }
    Ok(())
}
