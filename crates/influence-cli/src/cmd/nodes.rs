//! `influence nodes` — list the nodes of a sample graph.

use clap::Args;
use influence_core::graph::GraphKind;
use serde::Serialize;

use super::{Context, GraphSelection, SampleGraph};
use crate::output::{fail, pretty_section, render_mode};

/// Arguments for `influence nodes`.
#[derive(Args, Debug, Default)]
pub struct NodesArgs {
    #[command(flatten)]
    pub graph: GraphSelection,
}

#[derive(Debug, Serialize)]
pub struct NodeSummary {
    pub id: String,
    pub degree: usize,
}

/// Report payload for `influence nodes`.
#[derive(Debug, Serialize)]
pub struct NodesReport {
    pub kind: GraphKind,
    pub nodes: Vec<NodeSummary>,
}

/// Execute `influence nodes`.
pub fn run_nodes(args: &NodesArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = SampleGraph::load(ctx.kind(&args.graph));
    let nodes = graph
        .degrees()
        .map_err(|err| fail(ctx.output, err))?
        .into_iter()
        .map(|(id, degree)| NodeSummary { id, degree })
        .collect();

    let report = NodesReport {
        kind: graph.kind(),
        nodes,
    };

    render_mode(
        ctx.output,
        &report,
        |r, w| {
            for node in &r.nodes {
                writeln!(w, "{}", node.id)?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("{} graph: {} nodes", r.kind, r.nodes.len()))?;
            for node in &r.nodes {
                writeln!(w, "  {:<12} degree {}", node.id, node.degree)?;
            }
            Ok(())
        },
    )
}
