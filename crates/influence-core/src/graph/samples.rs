//! Built-in sample networks.
//!
//! Both are undirected: every edge is stored in both directions.
//!
//! ```text
//! social_network (unweighted)
//!
//!   Alicia ── Britney
//!      \        /
//!       Claire ── Diana ── Edward ── Gloria ── Fred
//!                    \                 /
//!                     └──── Harry ────┘
//!
//! weighted_network
//!
//!   A ─1─ B ─1─ E
//!   │     │     │
//!   1     3     2
//!   │     │     │
//!   C ─2─ D ─1─ F        G (isolated)
//!    \__________7__/
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::adjacency::{UnweightedGraph, WeightedEdge, WeightedGraph};
use crate::score::PathMetric;

/// Which of the two sample networks (and matching metric) to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// [`social_network`], measured in hops.
    #[default]
    Unweighted,
    /// [`weighted_network`], measured by edge weight.
    Weighted,
}

impl GraphKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unweighted => "unweighted",
            Self::Weighted => "weighted",
        }
    }

    /// BFS for unweighted graphs, Dijkstra for weighted ones.
    #[must_use]
    pub const fn metric(self) -> PathMetric {
        match self {
            Self::Unweighted => PathMetric::Hops,
            Self::Weighted => PathMetric::Weighted,
        }
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unweighted" | "u" => Ok(Self::Unweighted),
            "weighted" | "w" => Ok(Self::Weighted),
            other => Err(format!(
                "unknown graph kind '{other}' (expected unweighted or weighted)"
            )),
        }
    }
}

/// Eight people; `Alicia` is five hops from `Fred`.
#[must_use]
pub fn social_network() -> UnweightedGraph {
    const FRIENDSHIPS: [(&str, &str); 9] = [
        ("Alicia", "Britney"),
        ("Alicia", "Claire"),
        ("Britney", "Claire"),
        ("Claire", "Diana"),
        ("Diana", "Edward"),
        ("Diana", "Harry"),
        ("Edward", "Gloria"),
        ("Harry", "Gloria"),
        ("Gloria", "Fred"),
    ];

    let mut graph = UnweightedGraph::new();
    for (a, b) in FRIENDSHIPS {
        graph.add_undirected_edge(a, b.to_string());
    }
    graph
}

/// Seven nodes with weighted links; `G` has no edges at all.
#[must_use]
pub fn weighted_network() -> WeightedGraph {
    const LINKS: [(&str, &str, u32); 8] = [
        ("A", "B", 1),
        ("A", "C", 1),
        ("B", "D", 3),
        ("B", "E", 1),
        ("C", "D", 2),
        ("C", "F", 7),
        ("D", "F", 1),
        ("E", "F", 2),
    ];

    let mut graph = WeightedGraph::new();
    for (a, b, weight) in LINKS {
        graph.add_undirected_edge(a, WeightedEdge::new(b, weight));
    }
    graph.add_node("G");
    graph
}
