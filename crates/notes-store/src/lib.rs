//! notes-store: Storage layer for the notes service
//!
//! This crate provides:
//! - PostgreSQL storage for notes
//! - Migration management
//! - Type-safe, owner-scoped database operations via sqlx
//!
//! # Architecture
//!
//! One relational table holds all notes. Every read, update, and delete
//! carries the owning user's id in its predicate, so ownership enforcement
//! lives in the SQL rather than in handler code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_store::{NewNote, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//!
//! // Insert a note
//! let row = store.insert_note(&NewNote::new(user_id, title, body)).await?;
//!
//! // Page through a user's notes
//! let page = store.list_notes(user_id, 1, 12).await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{NewNote, NoteRow, NoteSummaryRow};
pub use store::{Store, StoreConfig};

// Re-export notes-core for downstream crates
pub use notes_core;
