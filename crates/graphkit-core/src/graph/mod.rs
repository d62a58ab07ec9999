//! Graph capabilities and path-finding operations
//!
//! Provides the graph algorithms the rest of the crate builds on:
//! - Capability traits (`Graph`, `KruskalGraph`, `Edge`) for pluggable graphs
//! - Dijkstra path-finding for weighted shortest paths
//! - Kruskal for minimum spanning trees
//! - Adjacency-list graphs for callers without their own representation

pub mod algos;
pub mod paths;
pub mod spanning;
pub mod traits;
pub mod types;

pub use algos::{
    dijkstra_shortest_path, kruskal_minimum_spanning_tree, DijkstraShortestPathFinder,
    KruskalMinimumSpanningTreeFinder,
};
pub use paths::{ShortestPath, ShortestPathFinder, ShortestPathsTree, SptShortestPathFinder};
pub use spanning::{MinimumSpanningTree, MinimumSpanningTreeFinder};
pub use traits::{Edge, Graph, KruskalGraph, UndirectedEdge};
pub use types::{
    AdjacencyListDirectedGraph, AdjacencyListUndirectedGraph, EdgeWithData, WeightedEdge,
};
