//! Note service implementation over a repository.
//!
//! Translates repository absence (`None`/`false`) into typed not-found
//! failures. The not-found messages are operation-specific and asserted on
//! by existing consumers, so they stay distinct: edit/remove say
//! "Note not found!", lookup by id says "There is no note with this id!".

use std::sync::Arc;

use async_trait::async_trait;

use memoranda_core::{Error, Note, NotePayload, NoteRepository, NoteService, Result};

/// Not-found message raised by edit and remove.
const NOTE_NOT_FOUND: &str = "Note not found!";

/// Not-found message raised by lookup by id.
const NO_NOTE_WITH_THIS_ID: &str = "There is no note with this id!";

/// `NoteService` backed by a `NoteRepository`.
pub struct DbNoteService {
    repo: Arc<dyn NoteRepository>,
}

impl DbNoteService {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl NoteService for DbNoteService {
    async fn get_all(&self) -> Result<Vec<Note>> {
        self.repo.list().await
    }

    async fn create(&self, payload: NotePayload) -> Result<Note> {
        self.repo.insert(&payload).await
    }

    async fn edit(&self, id: &str, payload: NotePayload) -> Result<Note> {
        self.repo
            .update(id, &payload)
            .await?
            .ok_or_else(|| Error::NotFound(NOTE_NOT_FOUND.to_string()))
    }

    async fn remove(&self, id: &str) -> Result<()> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(Error::NotFound(NOTE_NOT_FOUND.to_string()))
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<Note> {
        self.repo
            .fetch(id)
            .await?
            .ok_or_else(|| Error::NotFound(NO_NOTE_WITH_THIS_ID.to_string()))
    }
}
