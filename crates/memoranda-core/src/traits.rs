//! Core traits for memoranda abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Note, NotePayload};

/// Repository for note persistence.
///
/// Lookup methods return `None` rather than an error when no record matches
/// the identifier; translating absence into a domain failure is the service
/// layer's job.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List all notes in the store's natural return order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Insert a new note; the store assigns `id` and `created_at`.
    async fn insert(&self, payload: &NotePayload) -> Result<Note>;

    /// Replace title/content of the note with the given id, re-applying
    /// storage constraints. Returns the post-update note, or `None` when
    /// no record matched.
    async fn update(&self, id: &str, payload: &NotePayload) -> Result<Option<Note>>;

    /// Hard-delete the note with the given id. Returns whether a record
    /// was removed.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Fetch a note by id, or `None` when absent.
    async fn fetch(&self, id: &str) -> Result<Option<Note>>;
}

/// Domain service exposing one operation per CRUD action.
///
/// Implementations raise typed failures (`Error::NotFound` with an
/// operation-specific message) instead of leaking store-internal shapes.
/// The router layer holds this as a trait object so tests can substitute
/// an implementation without a real store.
#[async_trait]
pub trait NoteService: Send + Sync {
    /// Return all notes.
    async fn get_all(&self) -> Result<Vec<Note>>;

    /// Persist a new note from an already-validated payload.
    async fn create(&self, payload: NotePayload) -> Result<Note>;

    /// Replace title/content of an existing note and return the result.
    async fn edit(&self, id: &str, payload: NotePayload) -> Result<Note>;

    /// Remove a note by id.
    async fn remove(&self, id: &str) -> Result<()>;

    /// Fetch a single note by id.
    async fn get_by_id(&self, id: &str) -> Result<Note>;
}
