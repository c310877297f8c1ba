//! Bounded DFS over simple paths, for exploration.

use std::collections::HashSet;

use super::{PathEngine, PathResult};
use crate::graph::{Adjacency, Concept, Relation, Traversal};

pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Every simple path from `start_id` to `end_id` of at most `max_depth`
/// hops, shortest first. Paths are returned as walked (no chronological
/// normalization).
pub fn find_all_paths<'a>(
    start_id: &str,
    end_id: &str,
    nodes: &'a [Concept],
    edges: &'a [Relation],
    max_depth: usize,
) -> Vec<PathResult<'a>> {
    PathEngine::new(nodes, edges).all_paths(start_id, end_id, max_depth)
}

pub(super) fn search<'a>(
    adjacency: &Adjacency<'a>,
    start_id: &str,
    end_id: &str,
    max_depth: usize,
) -> Vec<PathResult<'a>> {
    if start_id.is_empty() || end_id.is_empty() || start_id == end_id {
        return Vec::new();
    }
    let Some(start) = adjacency.concept(start_id) else {
        return Vec::new();
    };
    if !adjacency.contains(end_id) {
        return Vec::new();
    }

    let mut walk = Walk {
        adjacency,
        start,
        end_id,
        max_depth,
        on_path: HashSet::from([start.id.as_str()]),
        hops: Vec::new(),
        found: Vec::new(),
    };
    walk.descend(start.id.as_str());

    let mut found = walk.found;
    // Stable: equal-length paths keep discovery order
    found.sort_by_key(|p| p.length);
    log::debug!("Found {} paths {} -> {} within {} hops", found.len(), start_id, end_id, max_depth);
    found
}

struct Walk<'w, 'a> {
    adjacency: &'w Adjacency<'a>,
    start: &'a Concept,
    end_id: &'w str,
    max_depth: usize,
    on_path: HashSet<&'a str>,
    hops: Vec<&'w Traversal<'a>>,
    found: Vec<PathResult<'a>>,
}

impl<'w, 'a> Walk<'w, 'a> {
    fn descend(&mut self, current: &'a str) {
        if self.hops.len() >= self.max_depth {
            return;
        }

        let adjacency = self.adjacency;
        for hop in adjacency.neighbors(current) {
            if self.on_path.contains(hop.target_id) {
                continue;
            }

            self.hops.push(hop);
            if hop.target_id == self.end_id {
                self.found.push(PathResult::from_hops(self.start, &self.hops));
            } else {
                self.on_path.insert(hop.target_id);
                self.descend(hop.target_id);
                self.on_path.remove(hop.target_id);
            }
            self.hops.pop();
        }
    }
}
