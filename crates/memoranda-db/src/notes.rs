//! Note repository implementation.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use sqlx::postgres::PgDatabaseError;
use sqlx::{Pool, Postgres};

use memoranda_core::schema::{CONTENT_TOO_SHORT, TITLE_TOO_SHORT};
use memoranda_core::{validate_object_id, Error, Note, NotePayload, NoteRepository, Result};

use crate::object_id;

/// Postgres `detail` line for a unique violation, e.g.
/// `Key (title)=(Groceries) already exists.`
static DUPLICATE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"Key \(([^)]+)\)=\((.*)\) already exists"#).expect("valid pattern"));

/// PostgreSQL implementation of NoteRepository.
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Translate a storage write failure into the domain error taxonomy.
///
/// Check-constraint violations become `Error::Validation` carrying the same
/// messages the input-validation boundary uses; unique violations become
/// `Error::Duplicate` with the first conflicting field. Anything else stays
/// a database error.
fn map_store_error(err: sqlx::Error) -> Error {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.code().as_deref() {
            Some("23514") => {
                return match db_err.constraint() {
                    Some("note_title_min_length") => {
                        Error::Validation(vec![TITLE_TOO_SHORT.to_string()])
                    }
                    Some("note_content_min_length") => {
                        Error::Validation(vec![CONTENT_TOO_SHORT.to_string()])
                    }
                    Some("note_id_format") => Error::Cast,
                    _ => Error::Validation(vec![db_err.message().to_string()]),
                };
            }
            Some("23505") => {
                let detail = db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(|pg| pg.detail());
                if let Some((field, value)) = detail.and_then(parse_duplicate_detail) {
                    return Error::Duplicate { field, value };
                }
                return Error::Duplicate {
                    field: db_err.constraint().unwrap_or("key").to_string(),
                    value: String::new(),
                };
            }
            _ => {}
        }
    }
    Error::Database(err)
}

/// Extract the first conflicting field and its value from a unique-violation
/// detail line.
fn parse_duplicate_detail(detail: &str) -> Option<(String, String)> {
    let caps = DUPLICATE_KEY_RE.captures(detail)?;
    let field = caps[1].split(',').next()?.trim().to_string();
    let value = caps[2].to_string();
    Some((field, value))
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list(&self) -> Result<Vec<Note>> {
        // No explicit sort: callers must not assume an ordering.
        let notes = sqlx::query_as::<_, Note>("SELECT id, title, content, created_at FROM note")
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(notes)
    }

    async fn insert(&self, payload: &NotePayload) -> Result<Note> {
        let id = object_id::generate();
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO note (id, title, content) VALUES ($1, $2, $3) \
             RETURNING id, title, content, created_at",
        )
        .bind(&id)
        .bind(&payload.title)
        .bind(&payload.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_store_error)?;
        Ok(note)
    }

    async fn update(&self, id: &str, payload: &NotePayload) -> Result<Option<Note>> {
        if validate_object_id(id).is_err() {
            return Err(Error::Cast);
        }

        // created_at is deliberately left untouched.
        let note = sqlx::query_as::<_, Note>(
            "UPDATE note SET title = $2, content = $3 WHERE id = $1 \
             RETURNING id, title, content, created_at",
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.content)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_store_error)?;
        Ok(note)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        if validate_object_id(id).is_err() {
            return Err(Error::Cast);
        }

        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch(&self, id: &str) -> Result<Option<Note>> {
        if validate_object_id(id).is_err() {
            return Err(Error::Cast);
        }

        let note = sqlx::query_as::<_, Note>(
            "SELECT id, title, content, created_at FROM note WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(note)
    }
}
