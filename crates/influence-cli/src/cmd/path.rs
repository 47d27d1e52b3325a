//! `influence path` — the nodes along one shortest route.

use clap::Args;
use influence_core::graph::{Distance, GraphKind};
use serde::Serialize;

use super::{Context, GraphSelection, SampleGraph};
use crate::output::{fail, pretty_kv, pretty_section, render_mode};

/// Arguments for `influence path`.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Start node.
    pub from: String,

    /// End node.
    pub to: String,

    #[command(flatten)]
    pub graph: GraphSelection,
}

/// Report payload for `influence path`. `nodes` is empty when unreachable.
#[derive(Debug, Serialize)]
pub struct PathReport {
    pub kind: GraphKind,
    pub from: String,
    pub to: String,
    pub reachable: bool,
    pub distance: Distance,
    pub nodes: Vec<String>,
}

/// Execute `influence path`.
pub fn run_path(args: &PathArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = SampleGraph::load(ctx.kind(&args.graph));
    let found = graph
        .path(&args.from, &args.to)
        .map_err(|err| fail(ctx.output, err))?;

    let (distance, nodes) = found.map_or_else(
        || (Distance::INFINITE, Vec::new()),
        |p| (p.distance, p.nodes),
    );

    let report = PathReport {
        kind: graph.kind(),
        from: args.from.clone(),
        to: args.to.clone(),
        reachable: distance.is_finite(),
        distance,
        nodes,
    };

    render_mode(
        ctx.output,
        &report,
        |r, w| {
            if r.reachable {
                writeln!(w, "{}", r.nodes.join(" -> "))
            } else {
                writeln!(w, "unreachable")
            }
        },
        |r, w| {
            pretty_section(w, &format!("Path {} -> {}", r.from, r.to))?;
            pretty_kv(w, "graph", r.kind.as_str())?;
            if !r.reachable {
                return pretty_kv(w, "route", "unreachable");
            }
            pretty_kv(w, "distance", r.distance.to_string())?;
            pretty_kv(w, "hops", (r.nodes.len() - 1).to_string())?;
            pretty_kv(w, "route", r.nodes.join(" -> "))
        },
    )
}
