//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `dijkstra`: Single-pair shortest paths over nonnegative weights
//! - `kruskal`: Minimum spanning trees via a disjoint-set forest

pub mod dijkstra;
pub mod kruskal;

pub use dijkstra::{dijkstra_shortest_path, DijkstraShortestPathFinder};
pub use kruskal::{kruskal_minimum_spanning_tree, KruskalMinimumSpanningTreeFinder};
