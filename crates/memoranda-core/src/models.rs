//! Core data models for memoranda.
//!
//! These types are shared across all memoranda crates and represent the
//! note entity as it appears on the wire and the payloads clients submit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted note.
///
/// Field names follow the public wire shape: `_id` is the 24-hex-character
/// identifier assigned by the persistence layer, `createdAt` is set at
/// insert time and never touched by edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Client payload for creating or editing a note.
///
/// Fields default to empty strings so that a missing field fails the
/// min-length schema check (with its field-specific message) instead of
/// failing JSON deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}
