//! Influence-path search over the concept graph.
//!
//! - [`find_shortest_path`]: BFS, normalized to read forward in time
//! - [`find_all_paths`]: bounded DFS over simple paths (exploratory)
//! - [`score_quality`]: plausibility score and warnings for a found path
//! - [`find_semantic_path`]: shortest path gated by length and score
//!
//! Results borrow from the caller's node and edge slices; nothing is mutated.

mod all_paths;
mod engine;
mod quality;
mod semantic;
mod shortest;

pub use all_paths::{find_all_paths, DEFAULT_MAX_DEPTH};
pub use engine::PathEngine;
pub use quality::{score_quality, PathQuality, PathWarning};
pub use semantic::{find_semantic_path, SemanticPath, SemanticPathOptions};
pub use shortest::find_shortest_path;

use serde::Serialize;

use crate::graph::{Concept, Relation, Traversal};
use crate::ontology::{reverse_of, RelationType};

/// A concept on a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathNode<'a> {
    pub node_id: &'a str,
    pub node: &'a Concept,
}

/// One hop of a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEdge<'a> {
    /// The authored edge this hop walks.
    pub edge: &'a Relation,
    /// Relation label as read along the path (reverse label after
    /// chronological normalization).
    #[serde(rename = "type")]
    pub relation_type: RelationType,
    pub description: Option<&'a str>,
    /// False: hop runs edge.source -> edge.target. True: edge.target -> edge.source.
    pub reversed: bool,
}

impl<'a> From<&Traversal<'a>> for PathEdge<'a> {
    fn from(hop: &Traversal<'a>) -> Self {
        Self {
            edge: hop.edge,
            relation_type: hop.relation_type.clone(),
            description: hop.description,
            reversed: hop.reversed,
        }
    }
}

/// A path of `length` hops: `path` holds `length + 1` concepts and `edges`
/// the hop between each consecutive pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<'a> {
    pub path: Vec<PathNode<'a>>,
    pub edges: Vec<PathEdge<'a>>,
    pub length: usize,
}

impl<'a> PathResult<'a> {
    /// Zero-hop path (start == end).
    pub fn single(node: &'a Concept) -> Self {
        Self {
            path: vec![PathNode {
                node_id: node.id.as_str(),
                node,
            }],
            edges: Vec::new(),
            length: 0,
        }
    }

    pub(crate) fn from_hops(start: &'a Concept, hops: &[&Traversal<'a>]) -> Self {
        let mut path = Vec::with_capacity(hops.len() + 1);
        path.push(PathNode {
            node_id: start.id.as_str(),
            node: start,
        });
        path.extend(hops.iter().map(|hop| PathNode {
            node_id: hop.target_id,
            node: hop.target,
        }));

        Self {
            path,
            edges: hops.iter().map(|hop| PathEdge::from(*hop)).collect(),
            length: hops.len(),
        }
    }

    pub fn start(&self) -> &'a Concept {
        self.path[0].node
    }

    pub fn end(&self) -> &'a Concept {
        self.path[self.path.len() - 1].node
    }

    /// Same path walked end to start: hop labels are replaced by their
    /// reverse labels and reversed flags flip.
    pub fn reversed(self) -> Self {
        let mut path = self.path;
        path.reverse();
        let edges = self
            .edges
            .into_iter()
            .rev()
            .map(|hop| PathEdge {
                relation_type: reverse_of(&hop.relation_type),
                reversed: !hop.reversed,
                ..hop
            })
            .collect();

        Self {
            path,
            edges,
            length: self.length,
        }
    }

    /// Every hop joins its two neighbouring concepts in the direction given
    /// by its reversed flag.
    pub fn is_connected(&self) -> bool {
        self.path.len() == self.edges.len() + 1
            && self.length == self.edges.len()
            && self.edges.iter().enumerate().all(|(i, hop)| {
                let from = self.path[i].node_id;
                let to = self.path[i + 1].node_id;
                if hop.reversed {
                    hop.edge.target == from && hop.edge.source == to
                } else {
                    hop.edge.source == from && hop.edge.target == to
                }
            })
    }

    /// Concept names joined with arrows; empty for a zero-hop path.
    pub fn format_names(&self) -> String {
        if self.length == 0 {
            return String::new();
        }
        self.path
            .iter()
            .map(|p| p.node.name.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// First authored edge joining two concepts in either direction.
/// `reversed` is set when the edge was authored from `b` to `a`.
pub fn find_direct_connection<'a>(a: &str, b: &str, edges: &'a [Relation]) -> Option<PathEdge<'a>> {
    edges
        .iter()
        .find(|e| (e.source == a && e.target == b) || (e.source == b && e.target == a))
        .map(|edge| PathEdge {
            edge,
            relation_type: edge.relation_type.clone(),
            description: edge.description.as_deref(),
            reversed: edge.source == b,
        })
}
