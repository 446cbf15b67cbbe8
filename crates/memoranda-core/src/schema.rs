//! Input validation schemas.
//!
//! Each validator takes an arbitrary input value and produces either a
//! normalized value or a human-readable violation message. Validators never
//! panic, and when several fields fail only the first declared field's
//! message is reported.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::NotePayload;

/// Violation message for a too-short note title.
pub const TITLE_TOO_SHORT: &str = "Note title should be at least 3 characters long!";

/// Violation message for a too-short note content.
pub const CONTENT_TOO_SHORT: &str = "Note content should be at least 3 characters long!";

/// Violation message for a malformed identifier.
pub const INVALID_OBJECT_ID: &str = "Id must be a valid MongooseDB ObjectId!";

/// Minimum length for note title (after trimming) and content.
const MIN_FIELD_LENGTH: usize = 3;

static OBJECT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-fA-F0-9]{24}$").expect("valid object id pattern"));

/// Validate a create/edit payload.
///
/// The title is trimmed before the length check and the normalized payload
/// carries the trimmed title; content is checked as-is. Title is checked
/// before content, and the first violation wins.
pub fn validate_note_payload(payload: &NotePayload) -> Result<NotePayload, String> {
    let title = payload.title.trim();
    if title.chars().count() < MIN_FIELD_LENGTH {
        return Err(TITLE_TOO_SHORT.to_string());
    }

    if payload.content.chars().count() < MIN_FIELD_LENGTH {
        return Err(CONTENT_TOO_SHORT.to_string());
    }

    Ok(NotePayload {
        title: title.to_string(),
        content: payload.content.clone(),
    })
}

/// Validate an identifier string: 24 hexadecimal characters, case-insensitive.
pub fn validate_object_id(id: &str) -> Result<&str, String> {
    if OBJECT_ID_RE.is_match(id) {
        Ok(id)
    } else {
        Err(INVALID_OBJECT_ID.to_string())
    }
}
