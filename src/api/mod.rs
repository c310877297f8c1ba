//! HTTP API over a loaded concept graph.

pub mod http;
pub mod types;

pub use http::HttpApiServer;
