//! Relation ontology: classifies every relation type by category, weight,
//! traversal direction and canonical reverse label.
//!
//! Categories describe what a hop means for an influence path:
//! - genealogical: one idea generated or inherited from another (time-ordered)
//! - ideological: stance relations such as opposition or critique
//! - illustrative: similarity and exemplification
//!
//! Unknown labels fall back to a low-confidence illustrative forward relation.

mod relation_type;

pub use relation_type::RelationType;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locale::Language;

/// Weight used for labels without an ontology entry.
pub const DEFAULT_WEIGHT: f64 = 0.3;

/// Layer a relation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Genealogical,
    Ideological,
    Illustrative,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Genealogical,
        Category::Ideological,
        Category::Illustrative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Genealogical => "genealogical",
            Category::Ideological => "ideological",
            Category::Illustrative => "illustrative",
        }
    }

    pub fn display_name(&self, language: Language) -> &'static str {
        match (self, language) {
            (Category::Genealogical, Language::En) => "Genealogical Chain",
            (Category::Genealogical, Language::Zh) => "谱系链",
            (Category::Ideological, Language::En) => "Ideological Opposition",
            (Category::Ideological, Language::Zh) => "意识形态对立",
            (Category::Illustrative, Language::En) => "Illustrative Connection",
            (Category::Illustrative, Language::Zh) => "说明性关联",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Genealogical => "📜",
            Category::Ideological => "⚔️",
            Category::Illustrative => "🔗",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Effective traversal direction of an authored `source -> target` edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Traverse source -> target.
    Forward,
    /// Traverse target -> source ("A influenced_by B" means B -> A).
    Backward,
    Bidirectional,
}

impl Direction {
    pub fn allows_forward(&self) -> bool {
        matches!(self, Direction::Forward | Direction::Bidirectional)
    }

    pub fn allows_backward(&self) -> bool {
        matches!(self, Direction::Backward | Direction::Bidirectional)
    }
}

/// Static classification of a known relation type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OntologyEntry {
    pub category: Category,
    pub weight: f64,
    pub direction: Direction,
    pub semantic_role: &'static str,
    pub description: &'static str,
    pub zh_description: &'static str,
}

const fn entry(
    category: Category,
    weight: f64,
    direction: Direction,
    semantic_role: &'static str,
    description: &'static str,
    zh_description: &'static str,
) -> OntologyEntry {
    OntologyEntry {
        category,
        weight,
        direction,
        semantic_role,
        description,
        zh_description,
    }
}

/// Ontology table lookup. Only the core labels are classified; every other
/// label takes the defaults.
pub fn entry_of(kind: &RelationType) -> Option<OntologyEntry> {
    use Category::*;
    use Direction::*;
    use RelationType as R;

    let found = match kind {
        R::InfluencedBy => entry(Genealogical, 1.0, Backward, "intellectual_influence", "A was intellectually influenced by B", "A受到B的思想影响"),
        R::Influenced => entry(Genealogical, 1.0, Forward, "intellectual_influence", "A influenced B intellectually", "A影响了B的思想"),
        R::EvolvedFrom => entry(Genealogical, 0.95, Backward, "evolutionary_development", "A evolved from B", "A从B演化而来"),
        R::EvolvedInto => entry(Genealogical, 0.95, Forward, "evolutionary_development", "A evolved into B", "A演化成B"),
        R::FoundedOn => entry(Genealogical, 0.9, Backward, "theoretical_foundation", "A is founded on B", "A建立在B的基础上"),
        R::FoundationFor => entry(Genealogical, 0.9, Forward, "theoretical_foundation", "A is the foundation for B", "A是B的理论基础"),
        R::BuiltOn => entry(Genealogical, 0.85, Backward, "incremental_building", "A is built on B", "A建立在B之上"),
        R::DerivedFrom => entry(Genealogical, 0.85, Backward, "derivation", "A is derived from B", "A源自B"),
        R::Developed => entry(Genealogical, 0.8, Forward, "development", "A developed B", "A发展了B"),
        R::BasedOn => entry(Genealogical, 0.8, Backward, "theoretical_basis", "A is based on B", "A基于B"),
        R::LedTo => entry(Genealogical, 0.75, Forward, "causal_progression", "A led to B", "A导致了B的出现"),

        R::Opposes => entry(Ideological, 0.7, Bidirectional, "political_opposition", "A opposes B", "A反对B"),
        R::Critiques => entry(Ideological, 0.75, Forward, "critical_analysis", "A critiques B", "A批判B"),
        R::ReactsAgainst => entry(Ideological, 0.7, Forward, "reactive_stance", "A reacts against B", "A是对B的反应"),
        R::ContrastsWith => entry(Ideological, 0.65, Bidirectional, "ideological_contrast", "A contrasts with B", "A与B形成对比"),
        R::Rejects => entry(Ideological, 0.7, Forward, "rejection", "A rejects B", "A拒绝B"),
        R::Challenges => entry(Ideological, 0.65, Forward, "intellectual_challenge", "A challenges B", "A挑战B"),

        R::SimilarTo => entry(Illustrative, 0.5, Bidirectional, "similarity", "A is similar to B", "A与B相似"),
        R::ExemplifiedBy => entry(Illustrative, 0.45, Forward, "exemplification", "A is exemplified by B", "A以B为例"),
        R::RelatedTo => entry(Illustrative, 0.4, Bidirectional, "general_relation", "A is related to B", "A与B相关"),
        R::SynthesizedWith => entry(Illustrative, 0.6, Bidirectional, "synthesis", "A is synthesized with B", "A与B综合"),
        R::Parallels => entry(Illustrative, 0.5, Bidirectional, "parallel_development", "A parallels B", "A与B平行发展"),
        R::ResonatesWith => entry(Illustrative, 0.45, Bidirectional, "thematic_resonance", "A resonates with B", "A与B产生共鸣"),

        _ => return None,
    };
    Some(found)
}

pub fn category_of(kind: &RelationType) -> Category {
    entry_of(kind)
        .map(|e| e.category)
        .unwrap_or(Category::Illustrative)
}

pub fn weight_of(kind: &RelationType) -> f64 {
    entry_of(kind).map(|e| e.weight).unwrap_or(DEFAULT_WEIGHT)
}

pub fn direction_of(kind: &RelationType) -> Direction {
    entry_of(kind)
        .map(|e| e.direction)
        .unwrap_or(Direction::Forward)
}

pub fn reverse_of(kind: &RelationType) -> RelationType {
    kind.reverse()
}

/// Whether a hop of category `next` may follow a hop of category `prev` on
/// one path. Directed: a lineage may turn into a stance (genealogical then
/// ideological) but not the other way round.
pub fn compatible_categories(prev: Category, next: Category) -> bool {
    prev == next || (prev == Category::Genealogical && next == Category::Ideological)
}

/// Classified labels of one category, in label declaration order.
pub fn relations_in(category: Category) -> Vec<RelationType> {
    RelationType::known()
        .filter(|kind| entry_of(kind).is_some_and(|e| e.category == category))
        .collect()
}

/// Classification of a relation type prepared for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationInfo {
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    pub category: Category,
    pub weight: f64,
    pub direction: Direction,
    pub reverse: RelationType,
    pub semantic_role: Option<&'static str>,
    pub description: &'static str,
    pub known: bool,
}

pub fn relation_info(kind: &RelationType, language: Language) -> RelationInfo {
    let found = entry_of(kind);
    let description = match (found, language) {
        (Some(e), Language::En) => e.description,
        (Some(e), Language::Zh) => e.zh_description,
        (None, Language::En) => "Unknown relation",
        (None, Language::Zh) => "未知关系",
    };

    RelationInfo {
        relation_type: kind.clone(),
        category: category_of(kind),
        weight: weight_of(kind),
        direction: direction_of(kind),
        reverse: reverse_of(kind),
        semantic_role: found.map(|e| e.semantic_role),
        description,
        known: found.is_some(),
    }
}
