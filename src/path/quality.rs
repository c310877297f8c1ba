//! Plausibility scoring of a found path.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use super::PathResult;
use crate::locale::Language;
use crate::ontology::{category_of, compatible_categories, weight_of, Category};

const BASE_SCORE: f64 = 100.0;
const HOP_PENALTY: f64 = 10.0;
const CROSS_LAYER_PENALTY: f64 = 20.0;
const INCOMPATIBLE_PENALTY: f64 = 15.0;
const SHORT_SPAN_BONUS: f64 = 10.0;
const TIME_REVERSAL_PENALTY: f64 = 20.0;
const OVERLONG_PENALTY: f64 = 15.0;

/// Endpoint spans under this many years earn the bonus.
const SHORT_SPAN_YEARS: i64 = 500;
/// Endpoint spans over this many years are flagged.
const LARGE_SPAN_YEARS: i64 = 1500;
/// A step may run this many years backwards before it counts as anachronistic.
const REVERSAL_TOLERANCE: i64 = 100;
/// Hop count above which a path is flagged as too long.
const COHERENT_HOPS: usize = 4;

/// Warning codes attached to a scored path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathWarning {
    CrossLayer,
    IncompatibleLayers,
    LargeTimeSpan,
    TimeReversal,
    PathTooLong,
}

impl PathWarning {
    pub fn code(&self) -> &'static str {
        match self {
            PathWarning::CrossLayer => "cross_layer",
            PathWarning::IncompatibleLayers => "incompatible_layers",
            PathWarning::LargeTimeSpan => "large_time_span",
            PathWarning::TimeReversal => "time_reversal",
            PathWarning::PathTooLong => "path_too_long",
        }
    }

    /// Reader-facing explanation.
    pub fn message(&self, language: Language) -> &'static str {
        match (self, language) {
            (PathWarning::CrossLayer, Language::En) => {
                "This path crosses different relation types (genealogical, ideological, illustrative)."
            }
            (PathWarning::CrossLayer, Language::Zh) => "此路径跨越了不同类型的关系（谱系、意识形态、说明性）。",
            (PathWarning::IncompatibleLayers, Language::En) => {
                "Some relations in this path are semantically incompatible."
            }
            (PathWarning::IncompatibleLayers, Language::Zh) => "此路径中的某些关系在语义上不兼容。",
            (PathWarning::LargeTimeSpan, Language::En) => {
                "This path spans more than 1500 years, which may indicate weak connections."
            }
            (PathWarning::LargeTimeSpan, Language::Zh) => "此路径跨越超过1500年，可能表明联系较弱。",
            (PathWarning::TimeReversal, Language::En) => {
                "This path includes anachronistic connections (later ideas \"influencing\" earlier ones)."
            }
            (PathWarning::TimeReversal, Language::Zh) => {
                "此路径包含时间倒置的连接（后来的思想\"影响\"早期的思想）。"
            }
            (PathWarning::PathTooLong, Language::En) => {
                "This path is longer than 4 steps, which reduces semantic coherence."
            }
            (PathWarning::PathTooLong, Language::Zh) => "此路径长度超过4步，这会降低语义连贯性。",
        }
    }
}

impl fmt::Display for PathWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Score, dominant category, warnings and average weight of one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathQuality {
    /// 0 to 100, higher is more plausible.
    pub score: u32,
    /// Dominant category; `None` for a zero-hop path.
    #[serde(rename = "type", serialize_with = "serialize_kind")]
    pub kind: Option<Category>,
    pub warnings: Vec<PathWarning>,
    /// Mean relation weight, rounded to two decimals.
    pub avg_weight: f64,
}

fn serialize_kind<S: Serializer>(kind: &Option<Category>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.as_ref().map(Category::as_str).unwrap_or("none"))
}

impl PathQuality {
    fn none() -> Self {
        Self {
            score: 0,
            kind: None,
            warnings: Vec::new(),
            avg_weight: 0.0,
        }
    }

    /// Wire label of the dominant category ("none" for zero hops).
    pub fn type_label(&self) -> &'static str {
        self.kind.as_ref().map(Category::as_str).unwrap_or("none")
    }

    pub fn has_warning(&self, warning: PathWarning) -> bool {
        self.warnings.contains(&warning)
    }

    pub fn messages(&self, language: Language) -> Vec<&'static str> {
        self.warnings.iter().map(|w| w.message(language)).collect()
    }
}

/// Most frequent category; ties go to the last tied category in order of
/// first appearance.
fn dominant_category(categories: &[Category]) -> Category {
    let mut order: Vec<Category> = Vec::new();
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for &category in categories {
        let count = counts.entry(category).or_insert(0);
        if *count == 0 {
            order.push(category);
        }
        *count += 1;
    }

    let mut best = order[0];
    for &category in &order[1..] {
        if counts[&category] >= counts[&best] {
            best = category;
        }
    }
    best
}

/// Score a found path. Pure: reads only the path and the ontology.
pub fn score_quality(path: &PathResult<'_>) -> PathQuality {
    if path.edges.is_empty() {
        return PathQuality::none();
    }

    let hops = path.edges.len();
    let mut score = BASE_SCORE;
    let mut warnings = Vec::new();

    score -= HOP_PENALTY * (hops as f64 - 1.0);

    let categories: Vec<Category> = path.edges.iter().map(|e| category_of(&e.relation_type)).collect();
    let kind = if categories.iter().all(|c| *c == categories[0]) {
        categories[0]
    } else {
        score -= CROSS_LAYER_PENALTY;
        warnings.push(PathWarning::CrossLayer);

        if categories.windows(2).any(|w| !compatible_categories(w[0], w[1])) {
            score -= INCOMPATIBLE_PENALTY;
            warnings.push(PathWarning::IncompatibleLayers);
        }
        dominant_category(&categories)
    };

    let avg_weight = path.edges.iter().map(|e| weight_of(&e.relation_type)).sum::<f64>() / hops as f64;
    score *= avg_weight;

    if let (Some(start_era), Some(end_era)) = (path.start().era, path.end().era) {
        let span = (i64::from(end_era) - i64::from(start_era)).abs();
        if span < SHORT_SPAN_YEARS {
            score += SHORT_SPAN_BONUS;
        }
        if span > LARGE_SPAN_YEARS {
            warnings.push(PathWarning::LargeTimeSpan);
        }

        let reversal = path.path.windows(2).any(|pair| match (pair[0].node.era, pair[1].node.era) {
            (Some(current), Some(next)) => i64::from(next) < i64::from(current) - REVERSAL_TOLERANCE,
            _ => false,
        });
        if reversal {
            score -= TIME_REVERSAL_PENALTY;
            warnings.push(PathWarning::TimeReversal);
        }
    }

    if hops > COHERENT_HOPS {
        warnings.push(PathWarning::PathTooLong);
        score -= OVERLONG_PENALTY * (hops - COHERENT_HOPS) as f64;
    }

    let score = score.clamp(0.0, 100.0).round() as u32;

    PathQuality {
        score,
        kind: Some(kind),
        warnings,
        avg_weight: (avg_weight * 100.0).round() / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{concept, edge};
    use super::super::{find_all_paths, find_shortest_path};
    use super::*;

    #[test]
    fn zero_hop_path_scores_nothing() {
        let nodes = vec![concept("a", Some(0))];
        let path = PathResult::single(&nodes[0]);
        let quality = score_quality(&path);
        assert_eq!(quality.score, 0);
        assert_eq!(quality.kind, None);
        assert_eq!(quality.type_label(), "none");
        assert!(quality.warnings.is_empty());
        assert_eq!(quality.avg_weight, 0.0);
    }

    #[test]
    fn two_hop_influence_chain() {
        // (100 - 10) * 1.0 + 0 (span 1000) = 90
        let nodes = vec![concept("a", Some(-500)), concept("b", Some(0)), concept("c", Some(500))];
        let edges = vec![edge("a", "b", "influenced"), edge("b", "c", "influenced")];
        let path = find_shortest_path("a", "c", &nodes, &edges).unwrap();
        let quality = score_quality(&path);

        assert_eq!(quality.score, 90);
        assert_eq!(quality.kind, Some(Category::Genealogical));
        assert!(quality.warnings.is_empty());
        assert_eq!(quality.avg_weight, 1.0);
    }

    #[test]
    fn short_span_bonus() {
        // 100 * 0.4 + 10 = 50
        let nodes = vec![concept("a", Some(1800)), concept("b", Some(1850))];
        let edges = vec![edge("a", "b", "related_to")];
        let path = find_shortest_path("a", "b", &nodes, &edges).unwrap();
        let quality = score_quality(&path);
        assert_eq!(quality.score, 50);
        assert_eq!(quality.kind, Some(Category::Illustrative));
    }

    #[test]
    fn compatible_cross_layer() {
        // genealogical then ideological: (90 - 20) * 0.875 = 61.25, +10 span
        let nodes = vec![concept("a", Some(1700)), concept("b", Some(1750)), concept("c", Some(1800))];
        let edges = vec![edge("a", "b", "influenced"), edge("b", "c", "critiques")];
        let path = find_shortest_path("a", "c", &nodes, &edges).unwrap();
        let quality = score_quality(&path);

        assert_eq!(quality.warnings, vec![PathWarning::CrossLayer]);
        assert_eq!(quality.score, 71);
        assert_eq!(quality.avg_weight, 0.88);
    }

    #[test]
    fn incompatible_layers_penalized_once() {
        let nodes = vec![
            concept("a", None),
            concept("b", None),
            concept("c", None),
            concept("d", None),
        ];
        let edges = vec![
            edge("a", "b", "critiques"),
            edge("b", "c", "led_to"),
            edge("c", "d", "critiques"),
        ];
        let path = find_shortest_path("a", "d", &nodes, &edges).unwrap();
        let quality = score_quality(&path);

        assert_eq!(
            quality.warnings,
            vec![PathWarning::CrossLayer, PathWarning::IncompatibleLayers]
        );
        // (80 - 20 - 15) * 0.75 = 33.75
        assert_eq!(quality.score, 34);
        assert_eq!(quality.avg_weight, 0.75);
        assert_eq!(quality.kind, Some(Category::Ideological));
    }

    #[test]
    fn dominant_category_tie_goes_to_later() {
        use Category::*;
        assert_eq!(dominant_category(&[Genealogical, Ideological]), Ideological);
        assert_eq!(dominant_category(&[Ideological, Genealogical, Genealogical]), Genealogical);
        assert_eq!(
            dominant_category(&[Illustrative, Genealogical, Genealogical, Illustrative]),
            Genealogical
        );
    }

    #[test]
    fn large_span_and_time_reversal() {
        // Walked as authored (no normalization) so the middle step runs backwards
        let nodes = vec![concept("a", Some(0)), concept("b", Some(-400)), concept("c", Some(1800))];
        let edges = vec![edge("a", "b", "similar_to"), edge("b", "c", "similar_to")];
        let paths = find_all_paths("a", "c", &nodes, &edges, 2);
        let quality = score_quality(&paths[0]);

        assert!(quality.has_warning(PathWarning::LargeTimeSpan));
        assert!(quality.has_warning(PathWarning::TimeReversal));
        // 90 * 0.5 - 20 = 25
        assert_eq!(quality.score, 25);
    }

    #[test]
    fn missing_endpoint_era_skips_time_checks() {
        let nodes = vec![concept("a", None), concept("b", Some(2000)), concept("c", Some(0))];
        let edges = vec![edge("a", "b", "similar_to"), edge("b", "c", "similar_to")];
        let paths = find_all_paths("a", "c", &nodes, &edges, 2);
        let quality = score_quality(&paths[0]);
        assert!(!quality.has_warning(PathWarning::TimeReversal));
        assert_eq!(quality.score, 45);
    }

    #[test]
    fn long_path_flagged_and_clamped() {
        let ids = ["a", "b", "c", "d", "e", "f", "g"];
        let nodes: Vec<_> = ids.iter().map(|id| concept(id, None)).collect();
        let edges: Vec<_> = ids.windows(2).map(|w| edge(w[0], w[1], "related_to")).collect();
        let path = find_shortest_path("a", "g", &nodes, &edges).unwrap();
        let quality = score_quality(&path);

        assert_eq!(path.length, 6);
        assert!(quality.has_warning(PathWarning::PathTooLong));
        // 50 * 0.4 - 30 is negative
        assert_eq!(quality.score, 0);
    }

    #[test]
    fn serializes_type_and_codes() {
        let nodes = vec![concept("a", Some(0)), concept("b", Some(2000))];
        let edges = vec![edge("a", "b", "influenced")];
        let path = find_shortest_path("a", "b", &nodes, &edges).unwrap();
        let json = serde_json::to_value(score_quality(&path)).unwrap();
        assert_eq!(json["type"], "genealogical");
        assert_eq!(json["warnings"][0], "large_time_span");
        assert_eq!(json["score"], 100);

        let empty = serde_json::to_value(PathQuality::none()).unwrap();
        assert_eq!(empty["type"], "none");
    }

    #[test]
    fn messages_localized() {
        assert!(PathWarning::PathTooLong.message(Language::En).contains("longer than 4 steps"));
        assert!(PathWarning::PathTooLong.message(Language::Zh).contains("4步"));
        assert_eq!(PathWarning::CrossLayer.to_string(), "cross_layer");
    }
}
