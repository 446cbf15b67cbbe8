//! Shared helpers for the HTTP integration tests.
//!
//! Tests drive the full router (identical to the one `main` serves,
//! including the middleware stack) with an in-memory repository injected
//! through the service seam, so no database is needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use memoranda_api::services::DbNoteService;
use memoranda_api::AppState;
use memoranda_core::{Note, NotePayload, NoteRepository, Result};
use memoranda_db::object_id;

/// In-memory `NoteRepository` substitute.
#[derive(Default)]
pub struct MemoryNoteRepository {
    notes: Mutex<Vec<Note>>,
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        Ok(self.notes.lock().await.clone())
    }

    async fn insert(&self, payload: &NotePayload) -> Result<Note> {
        let note = Note {
            id: object_id::generate(),
            title: payload.title.clone(),
            content: payload.content.clone(),
            created_at: Utc::now(),
        };
        self.notes.lock().await.push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: &str, payload: &NotePayload) -> Result<Option<Note>> {
        let mut notes = self.notes.lock().await;
        match notes.iter_mut().find(|n| n.id == id) {
            Some(note) => {
                note.title = payload.title.clone();
                note.content = payload.content.clone();
                Ok(Some(note.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut notes = self.notes.lock().await;
        let before = notes.len();
        notes.retain(|n| n.id != id);
        Ok(notes.len() < before)
    }

    async fn fetch(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.notes.lock().await.iter().find(|n| n.id == id).cloned())
    }
}

/// Build the application router over a fresh in-memory store.
pub fn build_test_app() -> Router {
    let repo = Arc::new(MemoryNoteRepository::default());
    let state = AppState {
        notes: Arc::new(DbNoteService::new(repo)),
    };
    memoranda_api::app(state)
}

/// Send a request to the app. The router is cheap to clone, so tests can
/// issue several requests against the same state.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_vec(json).unwrap())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, json: &serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: &Router, uri: &str, json: &serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(json)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Send a POST with a raw (possibly malformed) body.
pub async fn post_raw(app: &Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
