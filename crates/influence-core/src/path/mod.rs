//! Single-pair and single-source shortest paths.
//!
//! # Overview
//!
//! Two searches share one result shape:
//!
//! - **BFS** ([`bfs`]): every edge counts as one hop. FIFO order guarantees
//!   the first distance assigned to a node is its shortest.
//! - **Dijkstra** ([`dijkstra`]): sums edge weights using the binary heap in
//!   [`crate::queue`] as the frontier. Requires non-negative weights, which
//!   `u32` edge weights guarantee.
//!
//! Both accept any [`AdjacencyGraph`](crate::graph::AdjacencyGraph); BFS
//! ignores weights, so running it on a weighted graph yields hop counts.
//!
//! # Unknown and dangling nodes
//!
//! `start` and `end` are checked up front and fail with
//! [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode).
//! If the search later has to expand a neighbor that is not a key of the
//! adjacency map, it fails the same way, naming that neighbor. A dangling
//! neighbor that is discovered but never expanded does not fail the query.
//!
//! Unreachable targets are not errors: they yield [`Distance::INFINITE`].

pub mod bfs;
pub mod dijkstra;

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::graph::Distance;

pub use bfs::{bfs_distance, bfs_distances, bfs_path};
pub use dijkstra::{dijkstra_distance, dijkstra_distances, dijkstra_path};

/// A concrete shortest route between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// Total hops or total weight.
    pub distance: Distance,
    /// Visited nodes from start to end, both inclusive.
    pub nodes: Vec<String>,
}

/// Working state of one search: best known distances plus the predecessor
/// that produced each of them. Created per call and dropped afterwards.
#[derive(Debug, Default)]
struct SearchTree<'g> {
    distances: HashMap<&'g str, Distance>,
    parents: HashMap<&'g str, &'g str>,
}

impl<'g> SearchTree<'g> {
    fn rooted_at(start: &'g str) -> Self {
        let mut tree = Self::default();
        tree.distances.insert(start, Distance::ZERO);
        tree
    }

    /// Best known distance, [`Distance::INFINITE`] if never reached.
    fn distance_to(&self, node: &str) -> Distance {
        self.distances
            .get(node)
            .copied()
            .unwrap_or(Distance::INFINITE)
    }

    fn record(&mut self, node: &'g str, parent: &'g str, distance: Distance) {
        self.distances.insert(node, distance);
        self.parents.insert(node, parent);
    }

    /// Walk parent links back from `end`. `None` if `end` was never reached.
    fn path_to(&self, end: &str) -> Option<ShortestPath> {
        let distance = self.distance_to(end);
        if !distance.is_finite() {
            return None;
        }

        let mut nodes = vec![end.to_string()];
        let mut cursor = end;
        while let Some(&parent) = self.parents.get(cursor) {
            nodes.push(parent.to_string());
            cursor = parent;
        }
        nodes.reverse();

        Some(ShortestPath { distance, nodes })
    }

    fn into_distances(self) -> BTreeMap<String, Distance> {
        self.distances
            .into_iter()
            .map(|(node, distance)| (node.to_string(), distance))
            .collect()
    }
}
