use super::{all_paths, semantic, shortest};
use super::{PathResult, SemanticPath, SemanticPathOptions};
use crate::graph::{Adjacency, Concept, Relation};

/// Path queries over one borrowed dataset. The adjacency is built once and
/// reused by every query; results borrow from the dataset, not the engine.
#[derive(Debug, Clone)]
pub struct PathEngine<'a> {
    adjacency: Adjacency<'a>,
}

impl<'a> PathEngine<'a> {
    pub fn new(nodes: &'a [Concept], edges: &'a [Relation]) -> Self {
        Self {
            adjacency: Adjacency::build(nodes, edges),
        }
    }

    pub fn adjacency(&self) -> &Adjacency<'a> {
        &self.adjacency
    }

    pub fn concept(&self, id: &str) -> Option<&'a Concept> {
        self.adjacency.concept(id)
    }

    pub fn shortest_path(&self, start_id: &str, end_id: &str) -> Option<PathResult<'a>> {
        shortest::search(&self.adjacency, start_id, end_id)
    }

    pub fn all_paths(&self, start_id: &str, end_id: &str, max_depth: usize) -> Vec<PathResult<'a>> {
        all_paths::search(&self.adjacency, start_id, end_id, max_depth)
    }

    pub fn semantic_path(
        &self,
        start_id: &str,
        end_id: &str,
        options: SemanticPathOptions,
    ) -> Option<SemanticPath<'a>> {
        let found = self.shortest_path(start_id, end_id)?;
        semantic::accept(found, options)
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{concept, edge};
    use super::*;

    #[test]
    fn results_outlive_engine() {
        let nodes = vec![concept("a", Some(0)), concept("b", Some(10))];
        let edges = vec![edge("a", "b", "influenced")];
        let found = {
            let engine = PathEngine::new(&nodes, &edges);
            engine.shortest_path("a", "b")
        };
        assert_eq!(found.map(|p| p.length), Some(1));
    }

    #[test]
    fn one_engine_many_queries() {
        let nodes = vec![concept("a", Some(0)), concept("b", Some(10)), concept("c", Some(20))];
        let edges = vec![edge("a", "b", "influenced"), edge("b", "c", "led_to")];
        let engine = PathEngine::new(&nodes, &edges);

        assert_eq!(engine.adjacency().len(), 2);
        assert_eq!(engine.concept("c").map(|c| c.era), Some(Some(20)));
        assert_eq!(engine.shortest_path("a", "c").map(|p| p.length), Some(2));
        assert_eq!(engine.all_paths("a", "c", 5).len(), 1);
        assert!(engine
            .semantic_path("a", "c", SemanticPathOptions::default())
            .is_some());
        assert!(engine.shortest_path("c", "a").is_none());
    }
}
