//! Dijkstra shortest paths for weighted graphs.
//!
//! # Algorithm
//!
//! Label-setting search with [`PriorityQueue`] as the frontier:
//!
//! 1. Every node starts at [`Distance::INFINITE`] except `start` at 0;
//!    `(start, 0)` is pushed.
//! 2. Pop the smallest entry. If its node is already finalized the entry is
//!    stale and is dropped; otherwise the node is finalized.
//! 3. A finalized target ends the search with the popped priority.
//! 4. Otherwise relax each outgoing edge, pushing `(neighbor, improved)`
//!    whenever `current + weight` beats the neighbor's tentative distance.
//!
//! # Lazy deletion
//!
//! The heap has no decrease-key. An improved distance is pushed as a new
//! entry and the old one is left behind; the finalized set discards it when
//! it surfaces. This costs up to O(E) heap entries instead of O(V).
//!
//! Complexity: O((V + E) log E).

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, instrument, trace, warn};

use super::{SearchTree, ShortestPath};
use crate::error::Result;
use crate::graph::{AdjacencyGraph, Distance, Edge};
use crate::queue::PriorityQueue;

/// Minimum total edge weight from `start` to `end`.
///
/// Returns [`Distance::INFINITE`] when no path exists and
/// [`Distance::ZERO`] when `start == end`.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode)
/// if `start` or `end` is not a node, or if the search expands a dangling
/// neighbor.
#[instrument(level = "debug", skip(graph))]
pub fn dijkstra_distance<E: Edge>(
    graph: &AdjacencyGraph<E>,
    start: &str,
    end: &str,
) -> Result<Distance> {
    let tree = search(graph, start, Some(end))?;
    let distance = tree.distance_to(end);
    debug!(%distance, "dijkstra finished");
    Ok(distance)
}

/// Minimum total weight from `start` to every node it can reach, `start`
/// included.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode)
/// if `start` is not a node or a dangling neighbor is reached.
#[instrument(level = "debug", skip(graph))]
pub fn dijkstra_distances<E: Edge>(
    graph: &AdjacencyGraph<E>,
    start: &str,
) -> Result<BTreeMap<String, Distance>> {
    let distances = search(graph, start, None)?.into_distances();
    debug!(reached = distances.len(), "dijkstra finished");
    Ok(distances)
}

/// A minimum-weight route from `start` to `end`, or `None` if unreachable.
///
/// Among equal-cost routes, which one is returned depends on heap order.
///
/// # Errors
///
/// Same as [`dijkstra_distance`].
#[instrument(level = "debug", skip(graph))]
pub fn dijkstra_path<E: Edge>(
    graph: &AdjacencyGraph<E>,
    start: &str,
    end: &str,
) -> Result<Option<ShortestPath>> {
    Ok(search(graph, start, Some(end))?.path_to(end))
}

fn search<'g, E: Edge>(
    graph: &'g AdjacencyGraph<E>,
    start: &'g str,
    end: Option<&str>,
) -> Result<SearchTree<'g>> {
    graph.require(start)?;
    if let Some(end) = end {
        graph.require(end)?;
    }

    let mut tree = SearchTree::rooted_at(start);
    let mut finalized: HashSet<&str> = HashSet::with_capacity(graph.node_count());
    let mut frontier: PriorityQueue<&str> = PriorityQueue::with_capacity(graph.node_count());
    frontier.push(start, 0);

    while let Some((current, priority)) = frontier.try_pop() {
        if !finalized.insert(current) {
            trace!(node = current, priority, "discarding stale entry");
            continue;
        }

        if end == Some(current) {
            trace!(node = current, priority, "target finalized");
            break;
        }

        let edges = graph
            .neighbors(current)
            .inspect_err(|_| warn!(node = current, "expanded a node missing from the graph"))?;

        for edge in edges {
            let next = edge.target();
            let candidate = Distance::new(priority).saturating_add(u64::from(edge.weight()));
            if candidate < tree.distance_to(next) {
                tree.record(next, current, candidate);
                frontier.push(next, candidate.raw());
            }
        }
    }

    Ok(tree)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
