use serde::{Deserialize, Serialize};

use crate::graph::Concept;
use crate::locale::Language;
use crate::path::{PathResult, SemanticPath};

/// Concept list entry
#[derive(Debug, Serialize)]
pub struct ConceptSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub era: Option<i32>,
    pub domains: &'a [String],
}

impl<'a> From<&'a Concept> for ConceptSummary<'a> {
    fn from(concept: &'a Concept) -> Self {
        Self {
            id: &concept.id,
            name: &concept.name,
            era: concept.era,
            domains: &concept.domains,
        }
    }
}

/// Query for `/api/path`; omitted thresholds fall back to configuration.
#[derive(Debug, Default, Deserialize)]
pub struct PathQuery {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    pub max_length: Option<usize>,
    pub min_score: Option<u32>,
    #[serde(default)]
    pub lang: Language,
}

#[derive(Debug, Serialize)]
pub struct PathResponse<'a> {
    pub found: bool,
    pub path: Option<SemanticPath<'a>>,
    /// Concept names joined with arrows.
    pub summary: String,
    /// Localized warning messages.
    pub warnings: Vec<&'static str>,
}

/// Query for `/api/paths`
#[derive(Debug, Default, Deserialize)]
pub struct PathsQuery {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PathsResponse<'a> {
    pub count: usize,
    pub paths: Vec<PathResult<'a>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    #[serde(default)]
    pub lang: Language,
}
