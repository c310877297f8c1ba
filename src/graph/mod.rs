//! Concept graph: the immutable node/edge lists the path engine reads.
//!
//! Concepts are loaded once from JSON and never mutated afterwards. Edges are
//! derived from each concept's authored relationships.

mod adjacency;
pub mod loader;
mod report;

pub use adjacency::{Adjacency, Traversal, TIME_TOLERANCE};
pub use loader::{load_concepts, load_graph, load_positions, merge_positions, ConceptPosition};
pub use report::DatasetReport;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ontology::RelationType;
use crate::path::PathEngine;

/// A historical idea or ideology placed on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub name: String,
    /// Year the concept emerged; negative is BCE.
    #[serde(default)]
    pub era: Option<i32>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub key_figures: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// Outgoing relationship as authored on a concept record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub target: String,
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    #[serde(default)]
    pub description: Option<String>,
}

/// A directed edge (source --relation_type--> target) as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    #[serde(default)]
    pub description: Option<String>,
}

impl Relation {
    pub fn new(source: &str, target: &str, relation_type: impl Into<RelationType>) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            relation_type: relation_type.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Loaded dataset: concepts plus the edges derived from their relationships.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    nodes: Vec<Concept>,
    edges: Vec<Relation>,
}

impl ConceptGraph {
    pub fn new(nodes: Vec<Concept>, edges: Vec<Relation>) -> Self {
        Self { nodes, edges }
    }

    /// Build edges from every concept's relationships, keeping only those
    /// whose target concept exists.
    pub fn from_concepts(nodes: Vec<Concept>) -> Self {
        let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let mut edges = Vec::new();
        let mut dangling = 0usize;

        for node in &nodes {
            for rel in &node.relationships {
                if !ids.contains(rel.target.as_str()) {
                    dangling += 1;
                    continue;
                }
                edges.push(Relation {
                    source: node.id.clone(),
                    target: rel.target.clone(),
                    relation_type: rel.relation_type.clone(),
                    description: rel.description.clone(),
                });
            }
        }

        if dangling > 0 {
            log::debug!("Skipped {} relationships pointing at unknown concepts", dangling);
        }

        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Concept] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Relation] {
        &self.edges
    }

    pub fn concept(&self, id: &str) -> Option<&Concept> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Path engine over this graph (adjacency built once per engine).
    pub fn engine(&self) -> PathEngine<'_> {
        PathEngine::new(&self.nodes, &self.edges)
    }
}
