//! Cross-checks BFS and Dijkstra against independent references.
//!
//! Random directed graphs are compared against a textbook Floyd–Warshall
//! (all pairs, unit or real weights) and against petgraph's Dijkstra.

use std::collections::HashMap;

use petgraph::algo::dijkstra;
use petgraph::graph::{DiGraph, NodeIndex};
use proptest::prelude::*;

use influence_core::graph::samples::{social_network, weighted_network};
use influence_core::graph::{Distance, Edge, UnweightedGraph, WeightedEdge, WeightedGraph};
use influence_core::path::{
    bfs_distance, bfs_distances, dijkstra_distance, dijkstra_distances, dijkstra_path,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

type EdgeList = Vec<(usize, usize, u32)>;

fn name(i: usize) -> String {
    format!("n{i}")
}

fn arb_graph() -> impl Strategy<Value = (usize, EdgeList)> {
    (1_usize..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0_u32..20), 0..24),
        )
    })
}

fn weighted(n: usize, edges: &[(usize, usize, u32)]) -> WeightedGraph {
    let mut g = WeightedGraph::new();
    for i in 0..n {
        g.add_node(name(i));
    }
    for &(a, b, w) in edges {
        g.add_edge(name(a), WeightedEdge::new(name(b), w));
    }
    g
}

fn unweighted(n: usize, edges: &[(usize, usize, u32)]) -> UnweightedGraph {
    let mut g = UnweightedGraph::new();
    for i in 0..n {
        g.add_node(name(i));
    }
    for &(a, b, _) in edges {
        g.add_edge(name(a), name(b));
    }
    g
}

/// All-pairs reference. `None` = unreachable.
fn floyd_warshall(n: usize, edges: &[(usize, usize, u32)], unit: bool) -> Vec<Vec<Option<u64>>> {
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for &(a, b, w) in edges {
        let w = if unit { 1 } else { u64::from(w) };
        dist[a][b] = Some(dist[a][b].map_or(w, |d: u64| d.min(w)));
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    let through = ik + kj;
                    if dist[i][j].is_none_or(|d| through < d) {
                        dist[i][j] = Some(through);
                    }
                }
            }
        }
    }
    dist
}

fn petgraph_of(n: usize, edges: &[(usize, usize, u32)]) -> (DiGraph<String, u64>, Vec<NodeIndex>) {
    let mut g = DiGraph::new();
    let idx: Vec<NodeIndex> = (0..n).map(|i| g.add_node(name(i))).collect();
    for &(a, b, w) in edges {
        g.add_edge(idx[a], idx[b], u64::from(w));
    }
    (g, idx)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn dijkstra_matches_floyd_warshall((n, edges) in arb_graph()) {
        let g = weighted(n, &edges);
        let reference = floyd_warshall(n, &edges, false);
        for i in 0..n {
            for j in 0..n {
                let got = dijkstra_distance(&g, &name(i), &name(j)).unwrap();
                prop_assert_eq!(got.get(), reference[i][j], "n{} -> n{}", i, j);
            }
        }
    }

    #[test]
    fn bfs_matches_unit_floyd_warshall((n, edges) in arb_graph()) {
        let g = unweighted(n, &edges);
        let reference = floyd_warshall(n, &edges, true);
        for i in 0..n {
            for j in 0..n {
                let got = bfs_distance(&g, &name(i), &name(j)).unwrap();
                prop_assert_eq!(got.get(), reference[i][j], "n{} -> n{}", i, j);
            }
        }
    }

    #[test]
    fn dijkstra_matches_petgraph((n, edges) in arb_graph()) {
        let g = weighted(n, &edges);
        let (pg, idx) = petgraph_of(n, &edges);

        for (i, &source) in idx.iter().enumerate() {
            let expected: HashMap<String, u64> = dijkstra(&pg, source, None, |e| *e.weight())
                .into_iter()
                .map(|(node, d)| (pg[node].clone(), d))
                .collect();

            let got: HashMap<String, u64> = dijkstra_distances(&g, &name(i))
                .unwrap()
                .into_iter()
                .filter_map(|(node, d)| d.get().map(|d| (node, d)))
                .collect();

            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn single_source_agrees_with_single_pair((n, edges) in arb_graph()) {
        let g = unweighted(n, &edges);
        for i in 0..n {
            let all = bfs_distances(&g, &name(i)).unwrap();
            for j in 0..n {
                let pair = bfs_distance(&g, &name(i), &name(j)).unwrap();
                let from_map = all.get(&name(j)).copied().unwrap_or(Distance::INFINITE);
                prop_assert_eq!(pair, from_map);
            }
        }
    }

    #[test]
    fn dijkstra_path_is_walkable_and_costs_its_distance((n, edges) in arb_graph()) {
        let g = weighted(n, &edges);
        for i in 0..n {
            for j in 0..n {
                let Some(path) = dijkstra_path(&g, &name(i), &name(j)).unwrap() else {
                    continue;
                };
                prop_assert_eq!(path.nodes.first(), Some(&name(i)));
                prop_assert_eq!(path.nodes.last(), Some(&name(j)));

                let mut cost = 0_u64;
                for hop in path.nodes.windows(2) {
                    let cheapest = g
                        .neighbors(&hop[0])
                        .unwrap()
                        .iter()
                        .filter(|e| e.target() == hop[1])
                        .map(Edge::weight)
                        .min();
                    prop_assert!(cheapest.is_some(), "no edge {} -> {}", hop[0], hop[1]);
                    cost += u64::from(cheapest.unwrap_or_default());
                }
                prop_assert_eq!(Some(cost), path.distance.get());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sample graphs
// ---------------------------------------------------------------------------

#[test]
fn sample_alicia_to_fred_is_five() {
    assert_eq!(
        bfs_distance(&social_network(), "Alicia", "Fred").unwrap(),
        Distance::new(5)
    );
}

#[test]
fn sample_a_to_f_is_four() {
    assert_eq!(
        dijkstra_distance(&weighted_network(), "A", "F").unwrap(),
        Distance::new(4)
    );
}

#[test]
fn weighted_sample_is_symmetric() {
    let g = weighted_network();
    let nodes: Vec<&str> = g.nodes().collect();
    for a in &nodes {
        for b in &nodes {
            assert_eq!(
                dijkstra_distance(&g, a, b).unwrap(),
                dijkstra_distance(&g, b, a).unwrap(),
                "{a} <-> {b}"
            );
        }
    }
}

#[test]
fn every_node_is_zero_from_itself() {
    let social = social_network();
    let weighted = weighted_network();
    for node in social.nodes() {
        assert_eq!(bfs_distance(&social, node, node).unwrap(), Distance::ZERO);
        assert_eq!(dijkstra_distance(&social, node, node).unwrap(), Distance::ZERO);
    }
    for node in weighted.nodes() {
        assert_eq!(bfs_distance(&weighted, node, node).unwrap(), Distance::ZERO);
        assert_eq!(dijkstra_distance(&weighted, node, node).unwrap(), Distance::ZERO);
    }
}
