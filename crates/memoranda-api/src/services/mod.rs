//! Service layer between route handlers and persistence.

pub mod notes_service;

pub use notes_service::DbNoteService;
