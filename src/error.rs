use thiserror::Error;

/// Main error type for ideagraph
///
/// The path engine itself never fails: "no path" is `None`. These errors
/// come from loading datasets, configuration and the HTTP layer.
#[derive(Error, Debug)]
pub enum IdeagraphError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a dataset file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parse errors with file context
    #[error("Parse error: {0}")]
    Parse(String),

    /// Concept id not present in the loaded graph
    #[error("Concept not found: {0}")]
    ConceptNotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using IdeagraphError
pub type Result<T> = std::result::Result<T, IdeagraphError>;
