//! Property-based tests for the path engine over random graphs.
//!
//! - Reflexivity of shortest path
//! - Every returned path is connected hop by hop
//! - Shortest paths read forward in time
//! - The semantic facade never returns overlong or low-scoring paths
//! - Quality scores stay within 0..=100

use ideagraph::{
    find_all_paths, find_semantic_path, find_shortest_path, score_quality, Concept, Relation,
    SemanticPathOptions,
};
use proptest::prelude::*;

const LABELS: &[&str] = &[
    "influenced",
    "influenced_by",
    "evolved_from",
    "evolved_into",
    "led_to",
    "derived_from",
    "opposes",
    "critiques",
    "reacts_against",
    "contrasts_with",
    "similar_to",
    "related_to",
    "parallels",
    "inspired",
];

fn concept(i: usize, era: Option<i32>) -> Concept {
    Concept {
        id: format!("c{}", i),
        name: format!("Concept {}", i),
        era,
        domains: vec![],
        description: String::new(),
        key_figures: vec![],
        relationships: vec![],
        x: None,
        y: None,
    }
}

/// Random dataset: up to 10 concepts, some without era, up to 25 edges.
fn arb_graph() -> impl Strategy<Value = (Vec<Concept>, Vec<Relation>)> {
    prop::collection::vec(prop::option::weighted(0.85, -800i32..2000), 2..10).prop_flat_map(|eras| {
        let n = eras.len();
        let nodes: Vec<Concept> = eras.into_iter().enumerate().map(|(i, era)| concept(i, era)).collect();
        let edges = prop::collection::vec((0..n, 0..n, 0..LABELS.len()), 0..25).prop_map(|raw| {
            raw.into_iter()
                .filter(|(s, t, _)| s != t)
                .map(|(s, t, l)| Relation::new(&format!("c{}", s), &format!("c{}", t), LABELS[l]))
                .collect::<Vec<_>>()
        });
        (Just(nodes), edges)
    })
}

fn arb_case() -> impl Strategy<Value = (Vec<Concept>, Vec<Relation>, usize, usize)> {
    arb_graph().prop_flat_map(|(nodes, edges)| {
        let n = nodes.len();
        (Just(nodes), Just(edges), 0..n, 0..n)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn shortest_path_is_reflexive((nodes, edges, i, _j) in arb_case()) {
        let id = nodes[i].id.clone();
        let path = find_shortest_path(&id, &id, &nodes, &edges);
        prop_assert!(path.is_some());
        let path = path.unwrap();
        prop_assert_eq!(path.length, 0);
        prop_assert_eq!(path.path.len(), 1);
        prop_assert_eq!(path.path[0].node_id, id.as_str());
    }

    #[test]
    fn shortest_path_is_connected((nodes, edges, i, j) in arb_case()) {
        if let Some(path) = find_shortest_path(&nodes[i].id, &nodes[j].id, &nodes, &edges) {
            prop_assert_eq!(path.path.len(), path.edges.len() + 1);
            prop_assert!(path.is_connected(), "disconnected path: {:?}", path);
        }
    }

    #[test]
    fn all_paths_are_connected_and_bounded((nodes, edges, i, j) in arb_case(), depth in 1usize..5) {
        let paths = find_all_paths(&nodes[i].id, &nodes[j].id, &nodes, &edges, depth);
        for pair in paths.windows(2) {
            prop_assert!(pair[0].length <= pair[1].length);
        }
        for path in &paths {
            prop_assert!(path.length <= depth);
            prop_assert!(path.is_connected());
            prop_assert_eq!(path.start().id.as_str(), nodes[i].id.as_str());
            prop_assert_eq!(path.end().id.as_str(), nodes[j].id.as_str());
        }
    }

    #[test]
    fn shortest_path_reads_forward_in_time((nodes, edges, i, j) in arb_case()) {
        if let Some(path) = find_shortest_path(&nodes[i].id, &nodes[j].id, &nodes, &edges) {
            if let (Some(start), Some(end)) = (path.start().era, path.end().era) {
                prop_assert!(start <= end, "start era {} after end era {}", start, end);
            }
        }
    }

    #[test]
    fn facade_never_exceeds_thresholds(
        (nodes, edges, i, j) in arb_case(),
        max_length in 1usize..5,
        min_score in 0u32..=100,
    ) {
        let options = SemanticPathOptions { max_length, min_score };
        let raw = find_shortest_path(&nodes[i].id, &nodes[j].id, &nodes, &edges);
        let gated = find_semantic_path(&nodes[i].id, &nodes[j].id, &nodes, &edges, options);

        match (raw, gated) {
            (None, gated) => prop_assert!(gated.is_none()),
            (Some(raw), gated) => {
                let quality = score_quality(&raw);
                let acceptable = raw.length <= max_length && quality.score >= min_score;
                prop_assert_eq!(gated.is_some(), acceptable);
                if let Some(found) = gated {
                    prop_assert_eq!(found.result, raw);
                    prop_assert_eq!(found.quality, quality);
                }
            }
        }
    }

    #[test]
    fn quality_score_is_bounded((nodes, edges, i, j) in arb_case(), depth in 1usize..6) {
        for path in find_all_paths(&nodes[i].id, &nodes[j].id, &nodes, &edges, depth) {
            let quality = score_quality(&path);
            prop_assert!(quality.score <= 100);
            prop_assert!(quality.avg_weight > 0.0 && quality.avg_weight <= 1.0);
        }
    }
}
