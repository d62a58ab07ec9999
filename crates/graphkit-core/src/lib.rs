//! Graphkit Core Library
//!
//! Priority queues, disjoint-set forests and the graph algorithms built on
//! them: Dijkstra shortest paths and Kruskal minimum spanning trees, plus a
//! maze carver that exercises both.

pub mod config;
pub mod disjoint_sets;
pub mod error;
pub mod graph;
pub mod logging;
pub mod maze;
pub mod priority_queue;
