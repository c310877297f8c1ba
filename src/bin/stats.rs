use ideagraph::graph::{load_graph, DatasetReport};
use ideagraph::ontology::{relations_in, weight_of, Category};
use ideagraph::{Config, Language, RelationType};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    let graph = load_graph(&config.ideagraph)?;
    let report = DatasetReport::from_concepts(graph.nodes());

    println!("\n=== ideagraph Dataset Statistics ===\n");
    println!("Concepts:        {}", report.concepts);
    println!("Relationships:   {}", report.relationships);
    println!("Usable edges:    {}", graph.edges().len());
    println!("Traversals:      {}", graph.engine().adjacency().len());
    println!("Without era:     {}", report.missing_era.len());

    println!("\n--- By category ---\n");
    println!("{:<28} {:>8} {:>8} {:>10}", "Category", "Edges", "Share", "Labels");
    let total = report.relationships.max(1) as f64;
    for category in Category::ALL {
        let count = report.category_counts.get(&category).copied().unwrap_or(0);
        println!(
            "{:<28} {:>8} {:>7.1}% {:>10}",
            format!("{} {}", category.icon(), category.display_name(Language::En)),
            count,
            count as f64 * 100.0 / total,
            relations_in(category).len()
        );
    }

    println!("\n--- By relation type ---\n");
    if report.relation_counts.is_empty() {
        println!("No relationships in dataset.");
    } else {
        println!("{:<24} {:>8} {:>8}", "Relation", "Count", "Weight");
        for (label, count) in report.top_relations() {
            let kind = RelationType::from_label(label);
            let marker = if report.unclassified_labels.contains_key(label) { " *" } else { "" };
            println!("{:<24} {:>8} {:>8.2}{}", label, count, weight_of(&kind), marker);
        }
        if !report.unclassified_labels.is_empty() {
            println!("\n* unclassified: illustrative, default weight");
        }
    }

    Ok(())
}
