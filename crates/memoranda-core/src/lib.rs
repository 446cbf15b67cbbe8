//! # memoranda-core
//!
//! Core types, traits, and validation schemas for the memoranda notes API.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the other memoranda crates depend on.

pub mod error;
pub mod models;
pub mod schema;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use schema::{validate_note_payload, validate_object_id};
pub use traits::*;
