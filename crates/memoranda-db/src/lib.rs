//! # memoranda-db
//!
//! PostgreSQL persistence layer for memoranda.
//!
//! This crate provides:
//! - Connection pool management with an explicit lifecycle
//! - The note repository implementation
//! - Identifier generation for new notes
//! - Schema migrations (the storage-side min-length constraints live here)
//!
//! ## Example
//!
//! ```rust,ignore
//! use memoranda_db::Database;
//! use memoranda_core::{NotePayload, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/memoranda").await?;
//!     db.migrate().await?;
//!
//!     let note = db.notes.insert(&NotePayload {
//!         title: "Hello".to_string(),
//!         content: "First note".to_string(),
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod object_id;
pub mod pool;

pub use notes::PgNoteRepository;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};

// Re-export core types
pub use memoranda_core::*;

/// Owned database handle: the connection pool plus repositories bound to it.
///
/// Connections are established explicitly via [`Database::connect`] and
/// released via [`Database::close`]; there is no module-level singleton.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for CRUD operations.
    pub notes: std::sync::Arc<PgNoteRepository>,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: std::sync::Arc::new(PgNoteRepository::new(pool.clone())),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    /// Close the connection pool, waiting for in-flight queries to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
