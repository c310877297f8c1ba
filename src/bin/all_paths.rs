//! Exploratory CLI: list every simple influence path between two concepts.

use clap::Parser;
use ideagraph::graph::load_graph;
use ideagraph::{score_quality, Config};

/// List all simple paths up to a hop limit, shortest first.
#[derive(Parser, Debug)]
#[command(name = "all_paths")]
struct Args {
    /// Start concept id.
    start: String,

    /// End concept id.
    end: String,

    /// Hop limit (default: path.max_depth from config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Show at most this many paths.
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::load()?;
    let graph = load_graph(&config.ideagraph)?;

    let max_depth = args.max_depth.unwrap_or(config.path.max_depth);
    let paths = graph.engine().all_paths(&args.start, &args.end, max_depth);

    if paths.is_empty() {
        println!("No paths from {} to {} within {} hops.", args.start, args.end, max_depth);
        return Ok(());
    }

    println!(
        "{} paths from {} to {} within {} hops\n",
        paths.len(),
        args.start,
        args.end,
        max_depth
    );

    for (i, path) in paths.iter().take(args.limit).enumerate() {
        let quality = score_quality(path);
        let labels: Vec<String> = path.edges.iter().map(|e| e.relation_type.to_string()).collect();
        println!(
            "{:>3}. [{} hops, score {:>3}] {}",
            i + 1,
            path.length,
            quality.score,
            path.format_names()
        );
        println!("     via {}", labels.join(", "));
    }

    if paths.len() > args.limit {
        println!("\n... {} more (raise --limit to see them)", paths.len() - args.limit);
    }

    Ok(())
}
