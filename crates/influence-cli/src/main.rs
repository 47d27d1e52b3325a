#![forbid(unsafe_code)]

mod cmd;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use influence_core::config;
use output::OutputMode;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "influence: shortest paths and influence scores over sample social graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format: pretty, text or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Influence",
        about = "Influence score of one node",
        after_help = "EXAMPLES:\n    # Score a node in the social network\n    influence score Alicia\n\n    # Use edge weights instead of hops\n    influence score A --kind weighted\n\n    # Measure distances towards the node\n    influence score Fred --direction incoming --json"
    )]
    Score(cmd::score::ScoreArgs),

    #[command(
        next_help_heading = "Influence",
        about = "Rank every node by influence",
        after_help = "EXAMPLES:\n    # Rank the social network\n    influence rank\n\n    # Top three weighted nodes\n    influence rank --kind weighted --limit 3\n\n    # Emit machine-readable output\n    influence rank --json"
    )]
    Rank(cmd::rank::RankArgs),

    #[command(
        next_help_heading = "Paths",
        about = "Shortest distance between two nodes",
        after_help = "EXAMPLES:\n    # Hop count between two people\n    influence distance Alicia Fred\n\n    # Weighted distance\n    influence distance A F --kind weighted"
    )]
    Distance(cmd::distance::DistanceArgs),

    #[command(
        next_help_heading = "Paths",
        about = "Nodes along one shortest path",
        after_help = "EXAMPLES:\n    # Print the route\n    influence path Alicia Fred\n\n    # Emit machine-readable output\n    influence path A F --kind weighted --json"
    )]
    Path(cmd::path::PathArgs),

    #[command(
        next_help_heading = "Graphs",
        about = "List nodes of a sample graph",
        after_help = "EXAMPLES:\n    # Nodes of the social network\n    influence nodes\n\n    # Nodes of the weighted network\n    influence nodes --kind weighted"
    )]
    Nodes(cmd::nodes::NodesArgs),

    #[command(
        next_help_heading = "Utilities",
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    influence completions bash\n\n    # Generate zsh completions\n    influence completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

/// Logs go to stderr so stdout stays clean for `--format json`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("INFLUENCE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "influence=debug,info"
        } else {
            "influence=info,warn"
        })
    });

    let format = env::var("INFLUENCE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let user_config = config::load_user_config()?;
    debug!(?user_config, "loaded user config");

    let ctx = cmd::Context {
        output: output::resolve_output_mode(cli.format, cli.json, user_config.output.as_deref()),
        defaults: user_config.defaults,
    };

    match cli.command {
        Commands::Score(ref args) => cmd::score::run_score(args, &ctx),
        Commands::Rank(ref args) => cmd::rank::run_rank(args, &ctx),
        Commands::Distance(ref args) => cmd::distance::run_distance(args, &ctx),
        Commands::Path(ref args) => cmd::path::run_path(args, &ctx),
        Commands::Nodes(ref args) => cmd::nodes::run_nodes(args, &ctx),
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}
