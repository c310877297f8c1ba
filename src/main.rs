use anyhow::Result;
use ideagraph::api::HttpApiServer;
use ideagraph::graph::{load_graph, DatasetReport};
use ideagraph::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger from environment variable or default to info level
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("verify");

    match command {
        "serve" => run_http_server().await?,
        "verify" => run_dataset_verification()?,
        other => {
            log::warn!("Unknown command '{}', running verify", other);
            run_dataset_verification()?;
        }
    }

    Ok(())
}

/// Run the HTTP API over the configured dataset
async fn run_http_server() -> Result<()> {
    log::info!("Starting ideagraph HTTP API v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let graph = load_graph(&config.ideagraph)?;

    let port = config.http_server.port;
    let server = HttpApiServer::new(graph, &config);
    server.run(port).await?;

    Ok(())
}

/// Load config and dataset and report what the path engine will skip
fn run_dataset_verification() -> Result<()> {
    let config = Config::load()?;
    log::info!("Configuration loaded successfully");
    log::info!("Dataset: {}", config.dataset_path().display());
    if let Some(ref positions) = config.ideagraph.positions_path {
        log::info!("Positions: {}", positions.display());
    }
    log::info!(
        "Path defaults: max_length={} min_score={} max_depth={}",
        config.path.max_length,
        config.path.min_score,
        config.path.max_depth
    );

    let graph = load_graph(&config.ideagraph)?;
    let report = DatasetReport::from_concepts(graph.nodes());

    for id in &report.duplicate_ids {
        log::error!("Duplicate concept id: {}", id);
    }
    for (source, target) in &report.dangling {
        log::warn!("Relationship {} -> {} points at an unknown concept (skipped)", source, target);
    }
    for (label, count) in &report.unclassified_labels {
        log::warn!("Unclassified relation label '{}' used {} times (default weight applies)", label, count);
    }
    if !report.missing_era.is_empty() {
        log::warn!(
            "{} concepts without era (time checks skipped): {}",
            report.missing_era.len(),
            report.missing_era.join(", ")
        );
    }

    let traversals = graph.engine().adjacency().len();
    log::info!(
        "✓ {} concepts, {} relationships, {} traversal options",
        report.concepts,
        report.relationships,
        traversals
    );

    if report.is_clean() {
        log::info!("✓ Dataset integrity: OK");
    } else {
        anyhow::bail!(
            "Dataset integrity check failed: {} dangling relationships, {} duplicate ids",
            report.dangling.len(),
            report.duplicate_ids.len()
        );
    }

    Ok(())
}
