//! Directed adjacency with relation direction semantics and the
//! genealogical time filter applied.

use std::collections::HashMap;

use super::{Concept, Relation};
use crate::ontology::{category_of, direction_of, Category, RelationType};

/// Years a genealogical hop may run backwards in time (contemporaries and
/// dating noise).
pub const TIME_TOLERANCE: i32 = 50;

/// One way to leave a concept.
#[derive(Debug, Clone)]
pub struct Traversal<'a> {
    pub target: &'a Concept,
    pub target_id: &'a str,
    pub edge: &'a Relation,
    pub relation_type: &'a RelationType,
    pub description: Option<&'a str>,
    /// True when the hop runs target -> source of the authored edge.
    pub reversed: bool,
}

/// Outgoing traversal options per concept id, in input edge order.
#[derive(Debug, Clone, Default)]
pub struct Adjacency<'a> {
    concepts: HashMap<&'a str, &'a Concept>,
    options: HashMap<&'a str, Vec<Traversal<'a>>>,
}

/// `later` may descend from `earlier` when it is not more than the
/// tolerance older. Missing eras are unconstrained.
fn chronological(earlier: &Concept, later: &Concept) -> bool {
    match (earlier.era, later.era) {
        (Some(from), Some(to)) => i64::from(to) >= i64::from(from) - i64::from(TIME_TOLERANCE),
        _ => true,
    }
}

impl<'a> Adjacency<'a> {
    pub fn build(nodes: &'a [Concept], edges: &'a [Relation]) -> Self {
        let mut concepts = HashMap::with_capacity(nodes.len());
        let mut options: HashMap<&'a str, Vec<Traversal<'a>>> = HashMap::with_capacity(nodes.len());
        for node in nodes {
            concepts.insert(node.id.as_str(), node);
            options.entry(node.id.as_str()).or_default();
        }

        let mut dropped = 0usize;
        let mut pruned = 0usize;

        for edge in edges {
            let (source, target) = match (
                concepts.get(edge.source.as_str()),
                concepts.get(edge.target.as_str()),
            ) {
                (Some(s), Some(t)) => (*s, *t),
                _ => {
                    dropped += 1;
                    continue;
                }
            };

            let direction = direction_of(&edge.relation_type);
            let timed = category_of(&edge.relation_type) == Category::Genealogical;

            if direction.allows_forward() {
                if !timed || chronological(source, target) {
                    options.entry(source.id.as_str()).or_default().push(Traversal {
                        target,
                        target_id: target.id.as_str(),
                        edge,
                        relation_type: &edge.relation_type,
                        description: edge.description.as_deref(),
                        reversed: false,
                    });
                } else {
                    pruned += 1;
                }
            }

            if direction.allows_backward() {
                if !timed || chronological(target, source) {
                    options.entry(target.id.as_str()).or_default().push(Traversal {
                        target: source,
                        target_id: source.id.as_str(),
                        edge,
                        relation_type: &edge.relation_type,
                        description: edge.description.as_deref(),
                        reversed: true,
                    });
                } else {
                    pruned += 1;
                }
            }
        }

        if dropped > 0 {
            log::debug!("Dropped {} edges referencing unknown concepts", dropped);
        }
        if pruned > 0 {
            log::debug!("Pruned {} genealogical traversals that run backwards in time", pruned);
        }

        Self { concepts, options }
    }

    pub fn concept(&self, id: &str) -> Option<&'a Concept> {
        self.concepts.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.concepts.contains_key(id)
    }

    /// Outgoing options of a concept; empty for unknown ids.
    pub fn neighbors(&self, id: &str) -> &[Traversal<'a>] {
        self.options.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of traversal options.
    pub fn len(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
