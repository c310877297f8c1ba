//! Dataset loading: concept records and chart positions from JSON files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::{Concept, ConceptGraph};
use crate::config::DataConfig;
use crate::error::{IdeagraphError, Result};

/// Chart placement record (x = time axis, y = semantic axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptPosition {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub era: Option<i32>,
    #[serde(default)]
    pub domains: Vec<String>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| IdeagraphError::Parse(format!("JSON parse error in {}: {}", path.display(), e)))
}

/// Load a JSON array of concept records.
pub fn load_concepts(path: &Path) -> Result<Vec<Concept>> {
    let concepts: Vec<Concept> = read_json(path)?;
    log::debug!("Read {} concepts from {}", concepts.len(), path.display());
    Ok(concepts)
}

/// Load a JSON array of chart positions.
pub fn load_positions(path: &Path) -> Result<Vec<ConceptPosition>> {
    let positions: Vec<ConceptPosition> = read_json(path)?;
    log::debug!("Read {} positions from {}", positions.len(), path.display());
    Ok(positions)
}

/// One node per position, in position order. Placement fields come from the
/// position record; text and relationships from the concept with the same id.
pub fn merge_positions(positions: Vec<ConceptPosition>, concepts: Vec<Concept>) -> Vec<Concept> {
    let mut by_id: HashMap<String, Concept> =
        concepts.into_iter().map(|c| (c.id.clone(), c)).collect();

    positions
        .into_iter()
        .map(|pos| {
            let (description, key_figures, relationships) = match by_id.remove(&pos.id) {
                Some(c) => (c.description, c.key_figures, c.relationships),
                None => (String::new(), Vec::new(), Vec::new()),
            };
            Concept {
                id: pos.id,
                name: pos.name,
                era: pos.era,
                domains: pos.domains,
                description,
                key_figures,
                relationships,
                x: Some(pos.x),
                y: Some(pos.y),
            }
        })
        .collect()
}

/// Load the configured dataset, merged with chart positions when configured.
pub fn load_graph(config: &DataConfig) -> Result<ConceptGraph> {
    let concepts = load_concepts(&config.dataset_path)?;

    let nodes = match config.positions_path {
        Some(ref positions_path) => {
            let positions = load_positions(positions_path)?;
            merge_positions(positions, concepts)
        }
        None => concepts,
    };

    let graph = ConceptGraph::from_concepts(nodes);
    log::info!(
        "Loaded {} concepts and {} relations from {}",
        graph.nodes().len(),
        graph.edges().len(),
        config.dataset_path.display()
    );
    Ok(graph)
}
