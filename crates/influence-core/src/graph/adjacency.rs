//! Generic adjacency-list container shared by both graph kinds.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{GraphError, Result};

/// An outgoing edge stored in an adjacency list.
pub trait Edge {
    /// Id of the node this edge points at.
    fn target(&self) -> &str;

    /// Non-negative edge cost. Unweighted edges cost 1.
    fn weight(&self) -> u32;

    /// The same edge pointing back at `source`, used to mirror undirected edges.
    #[must_use]
    fn reversed(&self, source: &str) -> Self;
}

impl Edge for String {
    fn target(&self) -> &str {
        self
    }

    fn weight(&self) -> u32 {
        1
    }

    fn reversed(&self, source: &str) -> Self {
        source.to_string()
    }
}

/// A weighted outgoing edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    pub target: String,
    pub weight: u32,
}

impl WeightedEdge {
    #[must_use]
    pub fn new(target: impl Into<String>, weight: u32) -> Self {
        Self {
            target: target.into(),
            weight,
        }
    }
}

impl Edge for WeightedEdge {
    fn target(&self) -> &str {
        &self.target
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn reversed(&self, source: &str) -> Self {
        Self::new(source, self.weight)
    }
}

/// Mapping from node id to its ordered outgoing edges.
///
/// Keys are kept sorted so node iteration is deterministic. Parallel edges
/// are allowed and kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<E> {
    adjacency: BTreeMap<String, Vec<E>>,
}

/// Graph whose edges are bare neighbor ids.
pub type UnweightedGraph = AdjacencyGraph<String>;

/// Graph whose edges carry a `u32` weight.
pub type WeightedGraph = AdjacencyGraph<WeightedEdge>;

impl<E> Default for AdjacencyGraph<E> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<E: Edge> AdjacencyGraph<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Build a graph from a ready-made adjacency map.
    ///
    /// Targets are taken as given: a neighbor that never appears as a key
    /// makes the graph dangling. Use [`validate`](Self::validate) to check.
    pub fn from_adjacency<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = E>,
    {
        let mut adjacency = BTreeMap::new();
        for (node, edges) in entries {
            adjacency
                .entry(node.into())
                .or_insert_with(Vec::new)
                .extend(edges);
        }
        Self { adjacency }
    }

    /// Register `node` with no edges. Returns `false` if it already existed.
    pub fn add_node(&mut self, node: impl Into<String>) -> bool {
        let node = node.into();
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Append a directed edge. Both endpoints become nodes.
    pub fn add_edge(&mut self, from: impl Into<String>, edge: E) {
        let target = edge.target().to_string();
        self.adjacency.entry(from.into()).or_default().push(edge);
        self.adjacency.entry(target).or_default();
    }

    /// Append `edge` and its mirror image back to `from`.
    pub fn add_undirected_edge(&mut self, from: impl Into<String>, edge: E) {
        let from = from.into();
        let back = edge.reversed(&from);
        let target = edge.target().to_string();
        self.adjacency.entry(from).or_default().push(edge);
        self.adjacency.entry(target).or_default().push(back);
    }

    /// Whether `node` is a key of the adjacency map.
    #[must_use]
    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Fail with [`GraphError::UnknownNode`] unless `node` is a key.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is absent.
    pub fn require(&self, node: &str) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(GraphError::unknown(node))
        }
    }

    /// Outgoing edges of `node`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is absent.
    pub fn neighbors(&self, node: &str) -> Result<&[E]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::unknown(node))
    }

    /// Node ids in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of adjacency entries (an undirected edge counts twice).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Check that every edge target is itself a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DanglingEdge`] for the first offending edge in
    /// key order.
    pub fn validate(&self) -> Result<()> {
        for (from, edges) in &self.adjacency {
            if let Some(edge) = edges.iter().find(|e| !self.contains(e.target())) {
                debug!(from = %from, to = %edge.target(), "dangling edge");
                return Err(GraphError::DanglingEdge {
                    from: from.clone(),
                    to: edge.target().to_string(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_graph_is_empty() {
        let g = UnweightedGraph::default();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.contains("A"));

        let w = WeightedGraph::default();
        assert_eq!(w.node_count(), 0);
    }

    #[test]
    fn add_edge_registers_both_endpoints() {
        let mut g = UnweightedGraph::new();
        g.add_edge("A", "B".to_string());

        assert!(g.contains("A"));
        assert!(g.contains("B"));
        assert_eq!(g.neighbors("A").unwrap(), ["B".to_string()]);
        assert!(g.neighbors("B").unwrap().is_empty(), "directed: no back edge");
    }

    #[test]
    fn undirected_edge_is_mirrored_with_same_weight() {
        let mut g = WeightedGraph::new();
        g.add_undirected_edge("A", WeightedEdge::new("B", 7));

        assert_eq!(g.neighbors("A").unwrap(), [WeightedEdge::new("B", 7)]);
        assert_eq!(g.neighbors("B").unwrap(), [WeightedEdge::new("A", 7)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", WeightedEdge::new("B", 5));
        g.add_edge("A", WeightedEdge::new("B", 2));

        assert_eq!(g.neighbors("A").unwrap().len(), 2);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn add_node_reports_duplicates() {
        let mut g = UnweightedGraph::new();
        assert!(g.add_node("A"));
        assert!(!g.add_node("A"));
        assert_eq!(g.node_count(), 1);
    }

    #[test]
    fn nodes_iterate_sorted() {
        let mut g = UnweightedGraph::new();
        g.add_node("c");
        g.add_node("a");
        g.add_node("b");
        assert_eq!(g.nodes().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn neighbors_of_unknown_node_is_error() {
        let g = UnweightedGraph::new();
        assert_eq!(
            g.neighbors("ghost"),
            Err(GraphError::UnknownNode {
                node: "ghost".to_string()
            })
        );
    }

    #[test]
    fn validate_flags_dangling_target() {
        let g = UnweightedGraph::from_adjacency([("A", vec!["B".to_string()])]);
        assert_eq!(
            g.validate(),
            Err(GraphError::DanglingEdge {
                from: "A".to_string(),
                to: "B".to_string(),
            })
        );
    }

    #[test]
    fn validate_accepts_builder_graphs() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", WeightedEdge::new("B", 1));
        g.add_undirected_edge("B", WeightedEdge::new("C", 2));
        assert!(g.validate().is_ok());
    }

    #[test]
    fn from_adjacency_merges_repeated_keys() {
        let g = UnweightedGraph::from_adjacency([
            ("A", vec!["B".to_string()]),
            ("B", vec![]),
            ("A", vec!["B".to_string()]),
        ]);
        assert_eq!(g.neighbors("A").unwrap().len(), 2);
    }
}
