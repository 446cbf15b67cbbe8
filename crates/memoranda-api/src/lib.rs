//! # memoranda-api
//!
//! HTTP API server for memoranda.
//!
//! The router is built here (rather than in `main.rs`) so integration tests
//! exercise the exact app the binary serves, with the note service injected
//! through [`AppState`].

pub mod error;
pub mod handlers;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa_swagger_ui::{Config, SwaggerUi};
use uuid::Uuid;

use memoranda_core::NoteService;

/// Maximum accepted request body size (1 MB). Note payloads are two text
/// fields; anything larger is rejected before it reaches a handler.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation and debugging.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Application state shared across handlers.
///
/// The note service is held as a trait object so the route layer can be
/// tested against a substitute implementation without a real store.
#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteService>,
}

/// Build the application router with all middleware layers.
///
/// The OpenAPI spec is maintained in `openapi.yaml` and served at
/// `/api/openapi.yaml`; Swagger UI at `/api/docs` fetches from that endpoint.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        // OpenAPI / Swagger UI
        .merge(
            SwaggerUi::new("/api/docs").config(
                Config::new(["/api/openapi.yaml"])
                    .try_it_out_enabled(true)
                    .display_request_duration(true),
            ),
        )
        .route("/api/openapi.yaml", get(handlers::openapi_yaml))
        // Notes CRUD
        .route(
            "/api/notes",
            get(handlers::notes::list_notes).post(handlers::notes::create_note),
        )
        .route(
            "/api/notes/:note_id",
            get(handlers::notes::get_note)
                .put(handlers::notes::update_note)
                .delete(handlers::notes::delete_note),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(state)
}
