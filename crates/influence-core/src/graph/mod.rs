//! Adjacency-list graph model.
//!
//! # Overview
//!
//! Graphs are a mapping from node id to an ordered list of outgoing edges.
//! The same container serves both graph kinds:
//!
//! - [`UnweightedGraph`]: edges are bare neighbor ids with implicit weight 1.
//! - [`WeightedGraph`]: edges carry a non-negative `u32` weight.
//!
//! Only outgoing entries are followed by the shortest-path routines, so an
//! undirected graph is simply one where every edge appears in both
//! directions ([`AdjacencyGraph::add_undirected_edge`]).
//!
//! ## Typical Usage
//!
//! ```rust
//! use influence_core::graph::{UnweightedGraph, WeightedEdge, WeightedGraph};
//!
//! let mut friends = UnweightedGraph::new();
//! friends.add_undirected_edge("Alicia", "Britney".to_string());
//!
//! let mut roads = WeightedGraph::new();
//! roads.add_edge("A", WeightedEdge::new("B", 3));
//!
//! assert_eq!(friends.node_count(), 2);
//! assert_eq!(roads.edge_count(), 1);
//! ```

pub mod adjacency;
pub mod distance;
pub mod samples;

// Re-export primary types at module level for convenience.
pub use adjacency::{AdjacencyGraph, Edge, UnweightedGraph, WeightedEdge, WeightedGraph};
pub use distance::Distance;
pub use samples::GraphKind;
