use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::types::*;
use crate::config::{Config, PathConfig};
use crate::error::{IdeagraphError, Result};
use crate::graph::ConceptGraph;
use crate::ontology::{relation_info, relations_in, Category, RelationType};
use crate::path::SemanticPathOptions;

/// Deepest exploratory search a request may ask for.
const MAX_DEPTH_LIMIT: usize = 8;

/// HTTP server over one loaded graph
pub struct HttpApiServer {
    state: AppState,
    allowed_origins: Vec<String>,
}

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    graph: Arc<ConceptGraph>,
    defaults: PathConfig,
}

impl HttpApiServer {
    pub fn new(graph: ConceptGraph, config: &Config) -> Self {
        Self {
            state: AppState {
                graph: Arc::new(graph),
                defaults: config.path.clone(),
            },
            allowed_origins: config.http_server.allowed_origins.clone(),
        }
    }

    /// Server with default path settings and no origin restriction.
    pub fn with_graph(graph: ConceptGraph) -> Self {
        Self {
            state: AppState {
                graph: Arc::new(graph),
                defaults: PathConfig::default(),
            },
            allowed_origins: Vec::new(),
        }
    }

    /// Run the HTTP server
    pub async fn run(&self, port: u16) -> Result<()> {
        let app = self.router();

        let addr = format!("127.0.0.1:{}", port);
        log::info!("Starting ideagraph HTTP API on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
            IdeagraphError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to bind to {}: {}. Use a different port by setting http_server.port in config.toml",
                    addr, e
                ),
            ))
        })?;

        axum::serve(listener, app).await.map_err(|e| {
            IdeagraphError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP server error: {}", e),
            ))
        })?;

        Ok(())
    }

    /// Create the axum router
    pub fn router(&self) -> Router {
        // Empty list allows any origin (local development)
        let cors = if self.allowed_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<axum::http::HeaderValue> = self
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(handle_health))
            .route("/api/concepts", get(handle_concepts))
            .route("/api/concepts/:id", get(handle_concept))
            .route("/api/path", get(handle_path))
            .route("/api/paths", get(handle_paths))
            .route("/api/categories", get(handle_categories))
            .route("/api/relations/:relation_type", get(handle_relation))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors),
            )
            .with_state(self.state.clone())
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

fn require_endpoints(start: &str, end: &str) -> std::result::Result<(), Response> {
    if start.trim().is_empty() || end.trim().is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Both 'start' and 'end' query parameters are required".to_string(),
        ));
    }
    Ok(())
}

/// Handle health check endpoint
async fn handle_health() -> Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "service": "ideagraph",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
        .into_response()
}

async fn handle_concepts(State(state): State<AppState>) -> Response {
    let summaries: Vec<ConceptSummary<'_>> = state.graph.nodes().iter().map(ConceptSummary::from).collect();
    (StatusCode::OK, Json(summaries)).into_response()
}

async fn handle_concept(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.graph.concept(&id) {
        Some(concept) => (StatusCode::OK, Json(concept)).into_response(),
        None => error_response(StatusCode::NOT_FOUND, IdeagraphError::ConceptNotFound(id).to_string()),
    }
}

/// Semantic path with localized warnings. "No acceptable path" is a 200 with
/// `found: false`.
async fn handle_path(State(state): State<AppState>, Query(query): Query<PathQuery>) -> Response {
    if let Err(response) = require_endpoints(&query.start, &query.end) {
        return response;
    }

    let defaults = state.defaults.semantic_options();
    let options = SemanticPathOptions {
        max_length: query.max_length.unwrap_or(defaults.max_length),
        min_score: query.min_score.unwrap_or(defaults.min_score),
    };

    let engine = state.graph.engine();
    let found = engine.semantic_path(&query.start, &query.end, options);

    let body = match found {
        Some(path) => PathResponse {
            found: true,
            summary: path.result.format_names(),
            warnings: path.quality.messages(query.lang),
            path: Some(path),
        },
        None => {
            log::debug!("No acceptable path {} -> {}", query.start, query.end);
            PathResponse {
                found: false,
                path: None,
                summary: String::new(),
                warnings: Vec::new(),
            }
        }
    };

    (StatusCode::OK, Json(body)).into_response()
}

/// Exploratory listing of every simple path up to `max_depth` hops.
async fn handle_paths(State(state): State<AppState>, Query(query): Query<PathsQuery>) -> Response {
    if let Err(response) = require_endpoints(&query.start, &query.end) {
        return response;
    }

    let max_depth = query.max_depth.unwrap_or(state.defaults.max_depth);
    if max_depth > MAX_DEPTH_LIMIT {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("max_depth must be at most {}", MAX_DEPTH_LIMIT),
        );
    }

    let paths = state.graph.engine().all_paths(&query.start, &query.end, max_depth);
    let body = PathsResponse {
        count: paths.len(),
        paths,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Relation labels grouped by category, with localized category names.
async fn handle_categories(Query(query): Query<LanguageQuery>) -> Response {
    let categories: Vec<serde_json::Value> = Category::ALL
        .iter()
        .map(|category| {
            serde_json::json!({
                "category": category,
                "name": category.display_name(query.lang),
                "icon": category.icon(),
                "relations": relations_in(*category),
            })
        })
        .collect();
    (StatusCode::OK, Json(categories)).into_response()
}

async fn handle_relation(Path(label): Path<String>, Query(query): Query<LanguageQuery>) -> Response {
    let kind = RelationType::from_label(&label);
    (StatusCode::OK, Json(relation_info(&kind, query.lang))).into_response()
}
