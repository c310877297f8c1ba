pub mod api;
pub mod config;
pub mod error;
pub mod graph;
pub mod locale;
pub mod ontology;
pub mod path;

pub use config::Config;
pub use error::{IdeagraphError, Result};
pub use graph::{Concept, ConceptGraph, Relation};
pub use locale::Language;
pub use ontology::{Category, RelationType};
pub use path::{
    find_all_paths, find_semantic_path, find_shortest_path, score_quality, PathEngine, PathQuality,
    PathResult, PathWarning, SemanticPath, SemanticPathOptions,
};
