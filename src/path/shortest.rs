//! BFS shortest influence path.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{PathEngine, PathResult};
use crate::graph::{Adjacency, Concept, Relation, Traversal};

/// Minimum-hop path from `start_id` to `end_id`, read forward in time.
///
/// Returns `None` when either id is empty or unknown, or no path exists
/// under the direction and time constraints. `start_id == end_id` yields a
/// zero-hop path.
pub fn find_shortest_path<'a>(
    start_id: &str,
    end_id: &str,
    nodes: &'a [Concept],
    edges: &'a [Relation],
) -> Option<PathResult<'a>> {
    PathEngine::new(nodes, edges).shortest_path(start_id, end_id)
}

pub(super) fn search<'a>(adjacency: &Adjacency<'a>, start_id: &str, end_id: &str) -> Option<PathResult<'a>> {
    if start_id.is_empty() || end_id.is_empty() {
        return None;
    }

    let start = adjacency.concept(start_id)?;
    if start_id == end_id {
        return Some(PathResult::single(start));
    }
    if !adjacency.contains(end_id) {
        return None;
    }

    // Predecessor hop of every discovered concept; the visited set is filled
    // at enqueue so each concept keeps its first (shortest) discovery.
    let mut parents: HashMap<&'a str, (&'a str, &Traversal<'a>)> = HashMap::new();
    let mut visited: HashSet<&'a str> = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start.id.as_str());
    queue.push_back(start.id.as_str());

    while let Some(current) = queue.pop_front() {
        for hop in adjacency.neighbors(current) {
            if hop.target_id == end_id {
                let mut hops = vec![hop];
                let mut cursor = current;
                while let Some(&(prev, parent_hop)) = parents.get(cursor) {
                    hops.push(parent_hop);
                    cursor = prev;
                }
                hops.reverse();

                let found = PathResult::from_hops(start, &hops);
                debug_assert!(found.is_connected());
                return Some(normalize_chronologically(found));
            }

            if visited.insert(hop.target_id) {
                parents.insert(hop.target_id, (current, hop));
                queue.push_back(hop.target_id);
            }
        }
    }

    None
}

/// Reverse a path whose start is later than its end. Paths with a missing
/// endpoint era are returned as found.
fn normalize_chronologically(found: PathResult<'_>) -> PathResult<'_> {
    let (Some(start_era), Some(end_era)) = (found.start().era, found.end().era) else {
        return found;
    };
    if start_era <= end_era {
        return found;
    }

    log::info!(
        "Reversing path {} ({}) -> {} ({}) into chronological order",
        found.start().id,
        start_era,
        found.end().id,
        end_era
    );
    found.reversed()
}
