//! Core data types for the notes service.
//!
//! This module defines the fundamental types used throughout the service:
//!
//! - Each note belongs to exactly one owning user; there is no sharing
//! - Ownership is stamped at creation from the authenticated identity,
//!   never from request payloads
//! - `updated` is refreshed on every successful edit
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v4, providing type safety to distinguish note IDs from other
/// UUID-based identifiers in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a user.
///
/// The notes service does not mint these: the session provider issues them
/// and every operation receives one explicitly. Wrapping the UUID keeps user
/// ids from being confused with note ids at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Note
// ============================================================================

/// A note owned by a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Note ID, assigned at creation, immutable.
    pub id: NoteId,
    /// Owning user, stamped from the authenticated identity at creation.
    pub user_id: UserId,
    /// Note title.
    pub title: String,
    /// Note body.
    pub body: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last-edit timestamp, refreshed on every successful update.
    pub updated: DateTime<Utc>,
}

// ============================================================================
// Display truncation
// ============================================================================

/// Maximum title length shown on the list page.
pub const TITLE_PREVIEW_CHARS: usize = 30;

/// Maximum body length shown on the list page.
pub const BODY_PREVIEW_CHARS: usize = 100;

/// Truncate `text` to at most `max_chars` characters for list display.
///
/// Counts characters rather than bytes so multi-byte text never splits
/// mid-codepoint. The list query normally performs this truncation in its
/// projection; this helper is the reference behavior and the fallback for
/// values that were fetched whole.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_roundtrip() {
        let id = NoteId::new();
        let s = id.to_string();
        let parsed: NoteId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_note_id_serde_transparent() {
        let id = NoteId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }

    #[test]
    fn test_user_id_rejects_malformed() {
        assert!("not-a-uuid".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }

    #[test]
    fn test_preview_shorter_than_limit() {
        assert_eq!(preview("short", BODY_PREVIEW_CHARS), "short");
    }

    #[test]
    fn test_preview_truncates_to_exact_length() {
        let long = "x".repeat(500);
        let p = preview(&long, BODY_PREVIEW_CHARS);
        assert_eq!(p.chars().count(), 100);
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let text = "é".repeat(40);
        let p = preview(&text, TITLE_PREVIEW_CHARS);
        assert_eq!(p.chars().count(), 30);
    }

    #[test]
    fn test_note_serde_roundtrip() {
        let note = Note {
            id: NoteId::new(),
            user_id: UserId::from_uuid(Uuid::new_v4()),
            title: "Groceries".to_string(),
            body: "Milk, eggs".to_string(),
            created: Utc::now(),
            updated: Utc::now(),
        };
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, back);
    }
}
