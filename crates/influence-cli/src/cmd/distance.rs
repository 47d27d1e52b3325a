//! `influence distance` — shortest distance between two nodes.

use clap::Args;
use influence_core::graph::{Distance, GraphKind};
use serde::Serialize;

use super::{Context, GraphSelection, SampleGraph};
use crate::output::{fail, pretty_kv, pretty_section, render_mode};

/// Arguments for `influence distance`.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// Start node.
    pub from: String,

    /// End node.
    pub to: String,

    #[command(flatten)]
    pub graph: GraphSelection,
}

/// Report payload for `influence distance`. `distance` is `null` when
/// unreachable.
#[derive(Debug, Serialize)]
pub struct DistanceReport {
    pub kind: GraphKind,
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

/// Execute `influence distance`.
pub fn run_distance(args: &DistanceArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = SampleGraph::load(ctx.kind(&args.graph));
    let distance = graph
        .distance(&args.from, &args.to)
        .map_err(|err| fail(ctx.output, err))?;

    let report = DistanceReport {
        kind: graph.kind(),
        from: args.from.clone(),
        to: args.to.clone(),
        distance,
    };

    render_mode(
        ctx.output,
        &report,
        |r, w| writeln!(w, "{}", r.distance),
        |r, w| {
            pretty_section(w, &format!("{} -> {}", r.from, r.to))?;
            pretty_kv(w, "graph", r.kind.as_str())?;
            let shown = if r.distance.is_finite() {
                r.distance.to_string()
            } else {
                "unreachable".to_string()
            };
            pretty_kv(w, "distance", shown)
        },
    )
}
