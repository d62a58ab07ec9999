//! Command implementations for graphkit

pub mod carve;
pub mod dispatch;
pub mod format;
pub mod solve;
