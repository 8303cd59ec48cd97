//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the domain types in notes-core so the
//! query layer can project partial rows (list previews) without faking a
//! full `Note`.

use chrono::{DateTime, Utc};
use notes_core::{Note, NoteId, UserId};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            title: row.title,
            body: row.body,
            created: row.created,
            updated: row.updated,
        }
    }
}

/// Truncated row projected by the list query.
///
/// `title` and `body` arrive already cut to the preview lengths; the full
/// text never leaves the database for list pages.
#[derive(Debug, Clone, FromRow)]
pub struct NoteSummaryRow {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub updated: DateTime<Utc>,
}

/// Input for creating a new note.
///
/// The owner is part of the constructor signature, not a settable field:
/// whatever a request payload claims about ownership never reaches this
/// type.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub id: NoteId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

impl NewNote {
    pub fn new(user_id: UserId, title: String, body: String) -> Self {
        Self {
            id: NoteId::new(),
            user_id,
            title,
            body,
        }
    }

    pub fn with_id(id: NoteId, user_id: UserId, title: String, body: String) -> Self {
        Self {
            id,
            user_id,
            title,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_note_mints_distinct_ids() {
        let user = UserId::from_uuid(Uuid::new_v4());
        let a = NewNote::new(user, "a".into(), "".into());
        let b = NewNote::new(user, "b".into(), "".into());
        assert_ne!(a.id, b.id);
        assert_eq!(a.user_id, user);
    }

    #[test]
    fn test_note_row_into_domain() {
        let row = NoteRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            title: "T".into(),
            body: "B".into(),
            created: Utc::now(),
            updated: Utc::now(),
        };
        let note: Note = row.clone().into();
        assert_eq!(note.id.0, row.id);
        assert_eq!(note.user_id.0, row.user_id);
        assert_eq!(note.title, "T");
        assert_eq!(note.body, "B");
    }
}
