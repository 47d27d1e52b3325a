//! `influence rank` — every node ordered by influence.

use std::io::Write;

use clap::Args;
use influence_core::graph::GraphKind;
use influence_core::score::{InfluenceEntry, ScoreDirection};
use serde::Serialize;

use super::{Context, GraphSelection, SampleGraph};
use crate::output::{fail, pretty_rule, pretty_section, render_mode};

/// Arguments for `influence rank`.
#[derive(Args, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub graph: GraphSelection,

    /// Measure distances from each node (`outgoing`) or to it (`incoming`).
    #[arg(long)]
    pub direction: Option<ScoreDirection>,

    /// Show only the top N nodes.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Report payload for `influence rank`.
#[derive(Debug, Serialize)]
pub struct RankReport {
    pub kind: GraphKind,
    pub direction: ScoreDirection,
    pub entries: Vec<InfluenceEntry>,
}

/// Execute `influence rank`.
pub fn run_rank(args: &RankArgs, ctx: &Context) -> anyhow::Result<()> {
    let graph = SampleGraph::load(ctx.kind(&args.graph));
    let direction = ctx.direction(args.direction);

    let mut entries = graph.rank(direction).map_err(|err| fail(ctx.output, err))?;
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    let report = RankReport {
        kind: graph.kind(),
        direction,
        entries,
    };

    render_mode(
        ctx.output,
        &report,
        |r, w| {
            for entry in &r.entries {
                writeln!(w, "{}\t{:.6}", entry.node, entry.score)?;
            }
            Ok(())
        },
        |r, w| render_rank_human(r, w),
    )
}

fn render_rank_human(report: &RankReport, w: &mut dyn Write) -> std::io::Result<()> {
    pretty_section(
        w,
        &format!("Influence ranking ({}, {})", report.kind, report.direction),
    )?;
    writeln!(
        w,
        "{:>4}  {:<12} {:>10} {:>9} {:>9}",
        "#", "node", "score", "reach", "distance"
    )?;
    pretty_rule(w)?;
    for (i, entry) in report.entries.iter().enumerate() {
        writeln!(
            w,
            "{:>4}  {:<12} {:>10.6} {:>9} {:>9}",
            i + 1,
            entry.node,
            entry.score,
            entry.reachable,
            entry.total_distance
        )?;
    }
    Ok(())
}
