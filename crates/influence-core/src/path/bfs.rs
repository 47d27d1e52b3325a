//! Breadth-first shortest paths for unweighted graphs.
//!
//! # Algorithm
//!
//! 1. Seed a FIFO queue with `start` at distance 0 and mark it visited.
//! 2. Pop the front node and scan its outgoing edges in order.
//! 3. Each unvisited neighbor is marked visited, assigned
//!    `distance(current) + 1` and queued. If it is the target we stop right
//!    there: with unit weights the first assignment is already the shortest.
//!
//! Each node moves `unvisited → queued → finalized` at most once.
//!
//! Complexity: O(V + E).

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, instrument, trace, warn};

use super::{SearchTree, ShortestPath};
use crate::error::Result;
use crate::graph::{AdjacencyGraph, Distance, Edge};

/// Hop count from `start` to `end`.
///
/// Edge weights, if any, are ignored. Returns [`Distance::INFINITE`] when no
/// path exists and [`Distance::ZERO`] when `start == end`.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode)
/// if `start` or `end` is not a node, or if the search expands a dangling
/// neighbor.
#[instrument(level = "debug", skip(graph))]
pub fn bfs_distance<E: Edge>(graph: &AdjacencyGraph<E>, start: &str, end: &str) -> Result<Distance> {
    let tree = search(graph, start, Some(end))?;
    let distance = tree.distance_to(end);
    debug!(%distance, "bfs finished");
    Ok(distance)
}

/// Hop counts from `start` to every node it can reach, `start` included.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`](crate::error::GraphError::UnknownNode)
/// if `start` is not a node or a dangling neighbor is reached.
#[instrument(level = "debug", skip(graph))]
pub fn bfs_distances<E: Edge>(
    graph: &AdjacencyGraph<E>,
    start: &str,
) -> Result<BTreeMap<String, Distance>> {
    let distances = search(graph, start, None)?.into_distances();
    debug!(reached = distances.len(), "bfs finished");
    Ok(distances)
}

/// A fewest-hops route from `start` to `end`, or `None` if unreachable.
///
/// # Errors
///
/// Same as [`bfs_distance`].
#[instrument(level = "debug", skip(graph))]
pub fn bfs_path<E: Edge>(
    graph: &AdjacencyGraph<E>,
    start: &str,
    end: &str,
) -> Result<Option<ShortestPath>> {
    Ok(search(graph, start, Some(end))?.path_to(end))
}

/// Run BFS from `start`, stopping as soon as `end` (if any) is discovered.
fn search<'g, E: Edge>(
    graph: &'g AdjacencyGraph<E>,
    start: &'g str,
    end: Option<&str>,
) -> Result<SearchTree<'g>> {
    graph.require(start)?;
    if let Some(end) = end {
        graph.require(end)?;
    }

    // The tree's distance map doubles as the visited set.
    let mut tree = SearchTree::rooted_at(start);
    if end == Some(start) {
        return Ok(tree);
    }

    let mut queue: VecDeque<(&str, Distance)> = VecDeque::new();
    queue.push_back((start, Distance::ZERO));

    while let Some((current, depth)) = queue.pop_front() {
        let edges = graph
            .neighbors(current)
            .inspect_err(|_| warn!(node = current, "expanded a node missing from the graph"))?;
        let next_depth = depth.saturating_add(1);

        for edge in edges {
            let next = edge.target();
            if tree.distances.contains_key(next) {
                continue;
            }

            tree.record(next, current, next_depth);
            if end == Some(next) {
                trace!(node = next, %next_depth, "target discovered");
                return Ok(tree);
            }
            queue.push_back((next, next_depth));
        }
    }

    Ok(tree)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
