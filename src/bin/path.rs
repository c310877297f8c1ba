use ideagraph::graph::load_graph;
use ideagraph::ontology::{category_of, relation_info};
use ideagraph::path::find_direct_connection;
use ideagraph::{score_quality, Config, Language, PathResult, SemanticPathOptions};

struct PathArgs {
    start: String,
    end: String,
    max_length: Option<usize>,
    min_score: Option<u32>,
    lang: Language,
}

/// Parse CLI args: two positional ids, optional --max-length, --min-score, --lang.
fn parse_path_args() -> anyhow::Result<PathArgs> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut positional = Vec::new();
    let mut max_length = None;
    let mut min_score = None;
    let mut lang = Language::default();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--max-length" => {
                let value = iter.next().ok_or_else(|| anyhow::anyhow!("--max-length needs a value"))?;
                max_length = Some(value.parse()?);
            }
            "--min-score" => {
                let value = iter.next().ok_or_else(|| anyhow::anyhow!("--min-score needs a value"))?;
                min_score = Some(value.parse()?);
            }
            "--lang" => {
                let value = iter.next().ok_or_else(|| anyhow::anyhow!("--lang needs a value"))?;
                lang = value.parse()?;
            }
            flag if flag.starts_with("--") => continue,
            id => positional.push(id.to_string()),
        }
    }

    let mut positional = positional.into_iter();
    let (start, end) = match (positional.next(), positional.next()) {
        (Some(start), Some(end)) => (start, end),
        _ => anyhow::bail!(
            "Usage: path <start> <end> [--max-length <n>] [--min-score <n>] [--lang en|zh]\nExample: path stoicism existentialism --lang zh"
        ),
    };

    Ok(PathArgs {
        start,
        end,
        max_length,
        min_score,
        lang,
    })
}

fn era_label(era: Option<i32>) -> String {
    match era {
        Some(year) if year < 0 => format!("{} BCE", -i64::from(year)),
        Some(year) => year.to_string(),
        None => "?".to_string(),
    }
}

fn print_steps(path: &PathResult<'_>, lang: Language) {
    for (i, hop) in path.edges.iter().enumerate() {
        let from = path.path[i].node;
        let to = path.path[i + 1].node;
        let info = relation_info(&hop.relation_type, lang);
        println!("─────────────────────────────────────────────────────────────────────────────");
        println!(
            "Step {}: {} ({}) → {} ({})",
            i + 1,
            from.name,
            era_label(from.era),
            to.name,
            era_label(to.era)
        );
        println!(
            "Relation: {} [{} {}]{}",
            hop.relation_type,
            category_of(&hop.relation_type).icon(),
            category_of(&hop.relation_type).display_name(lang),
            if hop.reversed { " (reversed)" } else { "" }
        );
        println!("Meaning: {}", info.description);
        if let Some(description) = hop.description {
            println!("Note: {}", description);
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = parse_path_args()?;
    let config = Config::load()?;
    let graph = load_graph(&config.ideagraph)?;

    let defaults = config.path.semantic_options();
    let options = SemanticPathOptions {
        max_length: args.max_length.unwrap_or(defaults.max_length),
        min_score: args.min_score.unwrap_or(defaults.min_score),
    };

    for id in [&args.start, &args.end] {
        if graph.concept(id).is_none() {
            anyhow::bail!("Unknown concept id: {}", id);
        }
    }

    let engine = graph.engine();

    println!("\n╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║ ideagraph Influence Path                                                     ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝");
    println!(
        "\n{} → {} (max length {}, min score {})\n",
        args.start, args.end, options.max_length, options.min_score
    );

    if let Some(direct) = find_direct_connection(&args.start, &args.end, graph.edges()) {
        println!(
            "Direct connection: {} --{}--> {}\n",
            direct.edge.source, direct.relation_type, direct.edge.target
        );
    }

    match engine.semantic_path(&args.start, &args.end, options) {
        Some(found) => {
            println!("Path: {}", found.result.format_names());
            println!(
                "Quality: {}/100 ({}, avg weight {:.2})",
                found.quality.score,
                found.quality.type_label(),
                found.quality.avg_weight
            );
            print_steps(&found.result, args.lang);
            println!("─────────────────────────────────────────────────────────────────────────────");
            for message in found.quality.messages(args.lang) {
                println!("⚠ {}", message);
            }
        }
        None => match engine.shortest_path(&args.start, &args.end) {
            None => println!("No path found."),
            Some(raw) => {
                let quality = score_quality(&raw);
                println!("No acceptable path. Shortest path found:");
                println!("Path: {}", raw.format_names());
                if raw.length > options.max_length {
                    println!("Rejected: {} hops exceeds max length {}", raw.length, options.max_length);
                }
                if quality.score < options.min_score {
                    println!("Rejected: score {} below minimum {}", quality.score, options.min_score);
                }
                print_steps(&raw, args.lang);
                for message in quality.messages(args.lang) {
                    println!("⚠ {}", message);
                }
            }
        },
    }

    Ok(())
}
