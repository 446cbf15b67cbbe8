//! Note CRUD route handlers.
//!
//! Each route applies the same pipeline: validate the path identifier if
//! present, validate the body if present, invoke the service, map success
//! to a status code. Failures raised by the service are not caught here;
//! they propagate to the terminal handler via `ApiError`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use memoranda_core::{validate_note_payload, validate_object_id, NotePayload};

use crate::error::{ApiError, INVALID_JSON};
use crate::AppState;

/// Unwrap an extracted JSON body, mapping any parse failure to a 400.
fn require_json_body(
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Result<NotePayload, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(_) => Err(ApiError::BadRequest(INVALID_JSON.to_string())),
    }
}

pub async fn list_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state.notes.get_all().await?;
    Ok(Json(notes))
}

pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = require_json_body(payload)?;
    let data = validate_note_payload(&body).map_err(ApiError::BadRequest)?;

    let note = state.notes.create(data).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn update_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate_object_id(&note_id).map_err(ApiError::BadRequest)?;

    let body = require_json_body(payload)?;
    let data = validate_note_payload(&body).map_err(ApiError::BadRequest)?;

    let note = state.notes.edit(id, data).await?;
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate_object_id(&note_id).map_err(ApiError::BadRequest)?;

    state.notes.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_note(
    State(state): State<AppState>,
    Path(note_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = validate_object_id(&note_id).map_err(ApiError::BadRequest)?;

    let note = state.notes.get_by_id(id).await?;
    Ok(Json(note))
}
