//! Command handlers.
//!
//! Every command works against one of the built-in sample networks, chosen
//! with `--kind` (or the `defaults.kind` config value). The kind also picks
//! the metric: hops via BFS for `unweighted`, edge weights via Dijkstra for
//! `weighted`.

pub mod completions;
pub mod distance;
pub mod nodes;
pub mod path;
pub mod rank;
pub mod score;

use clap::Args;
use influence_core::config::DefaultsConfig;
use influence_core::graph::samples::{social_network, weighted_network};
use influence_core::graph::{Distance, Edge, GraphKind, UnweightedGraph, WeightedGraph};
use influence_core::path::ShortestPath;
use influence_core::score::{InfluenceEntry, ScoreDirection, measure_influence, rank_influence};
use influence_core::{AdjacencyGraph, Result};

use crate::output::OutputMode;

/// Settings shared by every command after flags and config are merged.
#[derive(Debug, Clone)]
pub struct Context {
    pub output: OutputMode,
    pub defaults: DefaultsConfig,
}

impl Context {
    /// `--kind` if given, otherwise the configured default.
    pub fn kind(&self, selection: &GraphSelection) -> GraphKind {
        selection.kind.unwrap_or(self.defaults.kind)
    }

    /// `--direction` if given, otherwise the configured default.
    pub fn direction(&self, flag: Option<ScoreDirection>) -> ScoreDirection {
        flag.unwrap_or(self.defaults.direction)
    }
}

/// `--kind` flag shared by all graph commands.
#[derive(Args, Debug, Default, Clone)]
pub struct GraphSelection {
    /// Sample graph to query: `unweighted` (hops) or `weighted` (edge weights).
    #[arg(long, short = 'k')]
    pub kind: Option<GraphKind>,
}

/// One of the sample networks, with queries dispatched to the metric that
/// matches its kind.
#[derive(Debug, Clone)]
pub enum SampleGraph {
    Unweighted(UnweightedGraph),
    Weighted(WeightedGraph),
}

impl SampleGraph {
    pub fn load(kind: GraphKind) -> Self {
        match kind {
            GraphKind::Unweighted => Self::Unweighted(social_network()),
            GraphKind::Weighted => Self::Weighted(weighted_network()),
        }
    }

    pub const fn kind(&self) -> GraphKind {
        match self {
            Self::Unweighted(_) => GraphKind::Unweighted,
            Self::Weighted(_) => GraphKind::Weighted,
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Self::Unweighted(g) => g.node_count(),
            Self::Weighted(g) => g.node_count(),
        }
    }

    pub fn distance(&self, from: &str, to: &str) -> Result<Distance> {
        let metric = self.kind().metric();
        match self {
            Self::Unweighted(g) => metric.distance(g, from, to),
            Self::Weighted(g) => metric.distance(g, from, to),
        }
    }

    pub fn path(&self, from: &str, to: &str) -> Result<Option<ShortestPath>> {
        let metric = self.kind().metric();
        match self {
            Self::Unweighted(g) => metric.path(g, from, to),
            Self::Weighted(g) => metric.path(g, from, to),
        }
    }

    pub fn influence(&self, node: &str, direction: ScoreDirection) -> Result<InfluenceEntry> {
        let metric = self.kind().metric();
        match self {
            Self::Unweighted(g) => measure_influence(g, node, direction, metric),
            Self::Weighted(g) => measure_influence(g, node, direction, metric),
        }
    }

    pub fn rank(&self, direction: ScoreDirection) -> Result<Vec<InfluenceEntry>> {
        let metric = self.kind().metric();
        match self {
            Self::Unweighted(g) => rank_influence(g, metric, direction),
            Self::Weighted(g) => rank_influence(g, metric, direction),
        }
    }

    /// `(node, out-degree)` pairs in node order.
    pub fn degrees(&self) -> Result<Vec<(String, usize)>> {
        match self {
            Self::Unweighted(g) => degrees(g),
            Self::Weighted(g) => degrees(g),
        }
    }
}

fn degrees<E: Edge>(graph: &AdjacencyGraph<E>) -> Result<Vec<(String, usize)>> {
    graph
        .nodes()
        .map(|node| Ok((node.to_string(), graph.neighbors(node)?.len())))
        .collect()
}
