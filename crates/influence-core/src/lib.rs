#![forbid(unsafe_code)]
//! influence-core library.
//!
//! Shortest-path engine and closeness-style influence scoring over
//! adjacency-list graphs.
//!
//! # Conventions
//!
//! - **Errors**: Graph queries return [`error::Result`] with a typed
//!   [`error::GraphError`]; config loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!
//! # Modules
//!
//! - [`graph`]: adjacency-list graph model and the sample networks.
//! - [`queue`]: binary min-heap used as the Dijkstra frontier.
//! - [`path`]: BFS (unweighted) and Dijkstra (weighted) shortest paths.
//! - [`score`]: influence (closeness) scores built on top of [`path`].
//! - [`config`]: user configuration loaded from TOML.

pub mod config;
pub mod error;
pub mod graph;
pub mod path;
pub mod queue;
pub mod score;

pub use error::{ErrorCode, GraphError, Result};
pub use graph::{
    AdjacencyGraph, Distance, Edge, GraphKind, UnweightedGraph, WeightedEdge, WeightedGraph,
};
pub use path::{
    ShortestPath, bfs_distance, bfs_distances, bfs_path, dijkstra_distance, dijkstra_distances,
    dijkstra_path,
};
pub use queue::PriorityQueue;
pub use score::{
    InfluenceEntry, PathMetric, ScoreDirection, influence_score_with, measure_influence,
    rank_influence, unweighted_influence_score, weighted_influence_score,
};
