//! `influence score` — influence of a single node.

use std::io::Write;

use clap::Args;
use influence_core::graph::GraphKind;
use influence_core::score::{InfluenceEntry, ScoreDirection};
use serde::Serialize;
use tracing::info;

use super::{Context, GraphSelection, SampleGraph};
use crate::output::{fail, pretty_kv, pretty_section, render_mode};

/// Arguments for `influence score`.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Node to score.
    pub node: String,

    #[command(flatten)]
    pub graph: GraphSelection,

    /// Measure distances from the node (`outgoing`) or to it (`incoming`).
    #[arg(long)]
    pub direction: Option<ScoreDirection>,
}

/// Report payload for `influence score`.
#[derive(Debug, Serialize)]
pub struct ScoreReport {
    pub kind: GraphKind,
    pub direction: ScoreDirection,
    pub node_count: usize,
    #[serde(flatten)]
    pub entry: InfluenceEntry,
}

/// Execute `influence score`.
pub fn run_score(args: &ScoreArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = SampleGraph::load(ctx.kind(&args.graph));
    let direction = ctx.direction(args.direction);

    let entry = graph
        .influence(&args.node, direction)
        .map_err(|err| fail(ctx.output, err))?;
    info!(node = %entry.node, score = entry.score, "scored node");

    let report = ScoreReport {
        kind: graph.kind(),
        direction,
        node_count: graph.node_count(),
        entry,
    };

    render_mode(
        ctx.output,
        &report,
        |r, w| writeln!(w, "{}\t{:.6}", r.entry.node, r.entry.score),
        |r, w| render_score_human(r, w),
    )
}

fn render_score_human(report: &ScoreReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(w, &format!("Influence of {}", report.entry.node))?;
    pretty_kv(
        w,
        "graph",
        format!("{} ({} nodes)", report.kind, report.node_count),
    )?;
    pretty_kv(w, "direction", report.direction.as_str())?;
    pretty_kv(
        w,
        "reachable",
        format!(
            "{} of {}",
            report.entry.reachable,
            report.node_count.saturating_sub(1)
        ),
    )?;
    pretty_kv(w, "distance", report.entry.total_distance.to_string())?;
    pretty_kv(w, "score", format!("{:.6}", report.entry.score))
}
