//! Influence (closeness) scores.
//!
//! # Definition
//!
//! ```text
//! influence(v) = (n - 1) / Σ_{u ≠ v} d(v, u)
//! ```
//!
//! where `n` is the node count of the whole graph and `d` is the
//! shortest-path distance. Higher means the node is, on average, closer to
//! everyone else.
//!
//! # Unreachable nodes
//!
//! An unreachable `u` adds 0 to the sum rather than infinity, and the
//! numerator stays `n - 1` regardless of how many nodes were reached. A node
//! that reaches nobody (or a graph with `n ≤ 1`) scores exactly `0.0`.
//!
//! A node whose only reachable neighbors sit behind zero-weight edges also
//! has a zero sum and therefore scores `0.0`.
//!
//! # Direction
//!
//! The formula above sums `d(v, u)`, which is [`ScoreDirection::Outgoing`]
//! and the default. Holding the scored node as the target and varying the
//! source instead gives `d(u, v)`, available as
//! [`ScoreDirection::Incoming`]. On undirected graphs the two coincide.
//!
//! # Cost
//!
//! Each score runs one single-pair search per other node, with the scored
//! node fixed. That is O(V · (V + E)) for BFS and O(V · E log E) for
//! Dijkstra.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::graph::{AdjacencyGraph, Distance, Edge, UnweightedGraph, WeightedGraph};
use crate::path::{ShortestPath, bfs_distance, bfs_path, dijkstra_distance, dijkstra_path};

/// Which way distances are measured relative to the scored node.
///
/// The two only differ on directed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDirection {
    /// `d(node, other)`: how quickly `node` reaches everyone.
    #[default]
    Outgoing,
    /// `d(other, node)`: how quickly everyone reaches `node`.
    Incoming,
}

impl ScoreDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outgoing => "outgoing",
            Self::Incoming => "incoming",
        }
    }
}

impl fmt::Display for ScoreDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreDirection {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "outgoing" | "out" => Ok(Self::Outgoing),
            "incoming" | "in" => Ok(Self::Incoming),
            other => Err(format!(
                "unknown direction '{other}' (expected outgoing or incoming)"
            )),
        }
    }
}

/// How a path's length is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathMetric {
    /// Edge count, via BFS.
    Hops,
    /// Edge-weight sum, via Dijkstra.
    Weighted,
}

impl PathMetric {
    /// Single-pair distance under this metric.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode)
    /// from the underlying search.
    pub fn distance<E: Edge>(
        self,
        graph: &AdjacencyGraph<E>,
        start: &str,
        end: &str,
    ) -> Result<Distance> {
        match self {
            Self::Hops => bfs_distance(graph, start, end),
            Self::Weighted => dijkstra_distance(graph, start, end),
        }
    }

    /// Single-pair route under this metric.
    ///
    /// # Errors
    ///
    /// Same as [`PathMetric::distance`].
    pub fn path<E: Edge>(
        self,
        graph: &AdjacencyGraph<E>,
        start: &str,
        end: &str,
    ) -> Result<Option<ShortestPath>> {
        match self {
            Self::Hops => bfs_path(graph, start, end),
            Self::Weighted => dijkstra_path(graph, start, end),
        }
    }
}

/// Score of one node plus the figures it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfluenceEntry {
    pub node: String,
    pub score: f64,
    /// Other nodes at a finite distance.
    pub reachable: usize,
    /// Sum of the finite distances.
    pub total_distance: u64,
}

/// Influence of `node` in an unweighted graph, using hop distances.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode)
/// if `node` is not in the graph or a search expands a dangling neighbor.
pub fn unweighted_influence_score(graph: &UnweightedGraph, node: &str) -> Result<f64> {
    influence_score_with(graph, node, ScoreDirection::Outgoing, PathMetric::Hops)
}

/// Influence of `node` in a weighted graph, using Dijkstra distances.
///
/// # Errors
///
/// Same as [`unweighted_influence_score`].
pub fn weighted_influence_score(graph: &WeightedGraph, node: &str) -> Result<f64> {
    influence_score_with(graph, node, ScoreDirection::Outgoing, PathMetric::Weighted)
}

/// Influence of `node` with an explicit direction and metric.
///
/// # Errors
///
/// Same as [`unweighted_influence_score`].
pub fn influence_score_with<E: Edge>(
    graph: &AdjacencyGraph<E>,
    node: &str,
    direction: ScoreDirection,
    metric: PathMetric,
) -> Result<f64> {
    Ok(measure_influence(graph, node, direction, metric)?.score)
}

/// Score every node, highest first. Ties are broken by node id.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode)
/// if any search expands a dangling neighbor.
#[instrument(level = "debug", skip(graph), fields(nodes = graph.node_count()))]
pub fn rank_influence<E: Edge>(
    graph: &AdjacencyGraph<E>,
    metric: PathMetric,
    direction: ScoreDirection,
) -> Result<Vec<InfluenceEntry>> {
    let mut entries = graph
        .nodes()
        .map(|node| measure_influence(graph, node, direction, metric))
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.node.cmp(&b.node)));
    Ok(entries)
}

/// Score of `node` together with its reach and distance sum.
///
/// # Errors
///
/// Same as [`unweighted_influence_score`].
#[instrument(level = "debug", skip(graph))]
pub fn measure_influence<E: Edge>(
    graph: &AdjacencyGraph<E>,
    node: &str,
    direction: ScoreDirection,
    metric: PathMetric,
) -> Result<InfluenceEntry> {
    graph.require(node)?;

    let mut total_distance: u64 = 0;
    let mut reachable = 0_usize;

    for other in graph.nodes().filter(|&other| other != node) {
        let (from, to) = match direction {
            ScoreDirection::Outgoing => (node, other),
            ScoreDirection::Incoming => (other, node),
        };

        // Unreachable contributes nothing; never add the sentinel.
        if let Some(d) = metric.distance(graph, from, to)?.get() {
            total_distance = total_distance.saturating_add(d);
            reachable += 1;
        }
    }

    let score = closeness(graph.node_count(), total_distance);
    debug!(reachable, total_distance, score, "influence measured");

    Ok(InfluenceEntry {
        node: node.to_string(),
        score,
        reachable,
        total_distance,
    })
}

/// `(n - 1) / total`, or 0 when there is nothing to divide.
#[allow(clippy::cast_precision_loss)]
fn closeness(node_count: usize, total_distance: u64) -> f64 {
    if node_count <= 1 || total_distance == 0 {
        return 0.0;
    }
    (node_count - 1) as f64 / total_distance as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
