//! notes-core: Core types for the notes service
//!
//! This crate provides:
//! - Typed identifiers (`NoteId`, `UserId`)
//! - The `Note` domain value
//! - Display-truncation helpers for list previews
//! - Search-term sanitization
//!
//! It contains no I/O; the storage and HTTP layers build on it.

pub mod search;
pub mod types;

pub use search::sanitize_search_term;
pub use types::{BODY_PREVIEW_CHARS, Note, NoteId, TITLE_PREVIEW_CHARS, UserId, preview};
