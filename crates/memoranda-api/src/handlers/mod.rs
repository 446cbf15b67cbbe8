//! HTTP route handlers.

pub mod notes;

use axum::http::header;
use axum::response::IntoResponse;

/// Liveness probe at the root path.
pub async fn root() -> &'static str {
    "Notes API is running!"
}

/// Serve the OpenAPI YAML spec.
pub async fn openapi_yaml() -> impl IntoResponse {
    const SPEC: &str = include_str!("../openapi.yaml");
    ([(header::CONTENT_TYPE, "application/yaml")], SPEC)
}
