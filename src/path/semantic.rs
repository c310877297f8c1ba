//! Shortest path gated by hop ceiling and quality floor.

use serde::{Deserialize, Serialize};

use super::{score_quality, PathEngine, PathQuality, PathResult};
use crate::graph::{Concept, Relation};

/// Acceptance thresholds for [`find_semantic_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticPathOptions {
    /// Most hops an accepted path may have.
    pub max_length: usize,
    /// Lowest accepted quality score.
    pub min_score: u32,
}

impl Default for SemanticPathOptions {
    fn default() -> Self {
        Self {
            max_length: 4,
            min_score: 40,
        }
    }
}

/// A path that passed the gate, with its quality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticPath<'a> {
    #[serde(flatten)]
    pub result: PathResult<'a>,
    pub quality: PathQuality,
}

/// Shortest path between two concepts, or `None` when there is none or it is
/// longer than `max_length` hops or scores below `min_score`.
pub fn find_semantic_path<'a>(
    start_id: &str,
    end_id: &str,
    nodes: &'a [Concept],
    edges: &'a [Relation],
    options: SemanticPathOptions,
) -> Option<SemanticPath<'a>> {
    PathEngine::new(nodes, edges).semantic_path(start_id, end_id, options)
}

/// Apply the gate to an already-found path.
pub(super) fn accept(result: PathResult<'_>, options: SemanticPathOptions) -> Option<SemanticPath<'_>> {
    let quality = score_quality(&result);

    if result.length > options.max_length {
        log::debug!(
            "Rejected path {} -> {}: {} hops exceeds max length {}",
            result.start().id,
            result.end().id,
            result.length,
            options.max_length
        );
        return None;
    }
    if quality.score < options.min_score {
        log::debug!(
            "Rejected path {} -> {}: score {} below minimum {}",
            result.start().id,
            result.end().id,
            quality.score,
            options.min_score
        );
        return None;
    }

    Some(SemanticPath { result, quality })
}
