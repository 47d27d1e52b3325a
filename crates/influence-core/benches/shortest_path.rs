use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use influence_core::graph::{UnweightedGraph, WeightedEdge, WeightedGraph};
use influence_core::path::{bfs_distance, dijkstra_distance};
use influence_core::score::{unweighted_influence_score, weighted_influence_score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug)]
struct Tier {
    name: &'static str,
    nodes: usize,
    avg_degree: usize,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: "S",
        nodes: 100,
        avg_degree: 4,
    },
    Tier {
        name: "M",
        nodes: 1_000,
        avg_degree: 6,
    },
    Tier {
        name: "L",
        nodes: 10_000,
        avg_degree: 8,
    },
];

fn node(i: usize) -> String {
    format!("v{i}")
}

/// Random undirected graph with a ring backbone so everything is connected.
fn generate(tier: Tier, seed: u64) -> (UnweightedGraph, WeightedGraph) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut unweighted = UnweightedGraph::new();
    let mut weighted = WeightedGraph::new();

    let mut link = |a: usize, b: usize, w: u32| {
        unweighted.add_undirected_edge(node(a), node(b));
        weighted.add_undirected_edge(node(a), WeightedEdge::new(node(b), w));
    };

    for i in 0..tier.nodes {
        link(i, (i + 1) % tier.nodes, rng.gen_range(1..50));
    }
    for _ in 0..tier.nodes * tier.avg_degree / 2 {
        let a = rng.gen_range(0..tier.nodes);
        let b = rng.gen_range(0..tier.nodes);
        link(a, b, rng.gen_range(1..50));
    }

    (unweighted, weighted)
}

fn bench_single_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("path.single_pair");

    for tier in TIERS {
        let (unweighted, weighted) = generate(tier, 0x1F1_u64 + tier.nodes as u64);
        let far = node(tier.nodes / 2);
        group.throughput(Throughput::Elements(tier.nodes as u64));

        group.bench_with_input(BenchmarkId::new("bfs", tier.name), &unweighted, |b, g| {
            b.iter(|| black_box(bfs_distance(g, "v0", &far)))
        });

        group.bench_with_input(
            BenchmarkId::new("dijkstra", tier.name),
            &weighted,
            |b, g| b.iter(|| black_box(dijkstra_distance(g, "v0", &far))),
        );
    }

    group.finish();
}

fn bench_influence(c: &mut Criterion) {
    let mut group = c.benchmark_group("score.influence");
    group.sample_size(10);

    // Scoring is quadratic in node count; the large tier is left out.
    for tier in &TIERS[..2] {
        let (unweighted, weighted) = generate(*tier, 0x5C0_u64 + tier.nodes as u64);

        group.bench_with_input(
            BenchmarkId::new("unweighted", tier.name),
            &unweighted,
            |b, g| b.iter(|| black_box(unweighted_influence_score(g, "v0"))),
        );

        group.bench_with_input(
            BenchmarkId::new("weighted", tier.name),
            &weighted,
            |b, g| b.iter(|| black_box(weighted_influence_score(g, "v0"))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_pair, bench_influence);
criterion_main!(benches);
