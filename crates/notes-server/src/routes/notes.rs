//! Note CRUD routes.
//!
//! This module implements the note-related HTTP endpoints:
//! - GET /notes - Paginated list of the user's notes (truncated previews)
//! - GET /notes/new - Empty form placeholder for the add-note page
//! - POST /notes - Create a note, redirect to the list
//! - GET /notes/{id} - Full note detail
//! - PUT /notes/{id} - Update a note, redirect to the list
//! - DELETE /notes/{id} - Delete a note, redirect to the list
//!
//! Every operation is scoped to the authenticated user supplied by the
//! `UserIdentity` extractor; a note that exists but belongs to someone
//! else is indistinguishable from one that does not exist.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Redirect,
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notes_core::NoteId;
use notes_store::{NewNote, NoteRow, NoteSummaryRow};

use crate::error::ApiResult;
use crate::extract::UserIdentity;
use crate::state::AppState;

/// Notes shown per list page.
pub const PER_PAGE: u32 = 12;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for GET /notes.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// 1-based page number; defaults to 1.
    pub page: Option<u32>,
}

/// Truncated note preview in the list response.
#[derive(Debug, Serialize)]
pub struct NotePreview {
    /// Note ID.
    pub id: Uuid,
    /// Title, cut to the preview length.
    pub title: String,
    /// Body, cut to the preview length.
    pub body: String,
    /// Last-edit timestamp.
    pub updated: DateTime<Utc>,
}

impl From<NoteSummaryRow> for NotePreview {
    fn from(row: NoteSummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            updated: row.updated,
        }
    }
}

/// Response for GET /notes.
#[derive(Debug, Serialize)]
pub struct ListNotesResponse {
    pub notes: Vec<NotePreview>,
    /// The page that was fetched.
    pub current: u32,
    /// Total pages, `ceil(total / per_page)`.
    pub pages: u32,
    /// Total notes owned by the user.
    pub total: i64,
}

/// A fully-hydrated note, as returned by GET /notes/{id} and search.
///
/// Carries exactly the user-visible fields; the owner id stays internal.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl From<NoteRow> for NoteResponse {
    fn from(row: NoteRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            body: row.body,
            created: row.created,
            updated: row.updated,
        }
    }
}

/// Request body for POST /notes and PUT /notes/{id}.
///
/// Deliberately has no owner field: a payload claiming `"user": ...` is
/// dropped during deserialization and the authenticated identity is
/// stamped instead.
#[derive(Debug, Deserialize)]
pub struct NotePayload {
    pub title: String,
    pub body: String,
}

/// Response for GET /notes/new - an empty form for initial render.
#[derive(Debug, Default, Serialize)]
pub struct NoteFormResponse {
    pub title: String,
    pub body: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Total pages needed for `total` notes at `per_page` per page.
fn total_pages(total: i64, per_page: u32) -> u32 {
    if total <= 0 {
        return 0;
    }
    (total as u64).div_ceil(u64::from(per_page)) as u32
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /notes - Paginated list of the user's notes.
///
/// Notes are sorted by last edit, newest first. Title and body come back
/// truncated for display; the full text is only on the detail endpoint.
///
/// # Response
///
/// - 200 OK: `{ "notes": [...], "current": 1, "pages": 3, "total": 25 }`
/// - 400 Bad Request: malformed user id
/// - 401 Unauthorized: missing/invalid session token
async fn list_notes(
    State(state): State<AppState>,
    UserIdentity(user_id): UserIdentity,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ListNotesResponse>> {
    let store = state.store();
    let page = query.page.unwrap_or(1).max(1);

    let rows = store.list_notes(user_id, page, PER_PAGE).await?;

    // Separate round trip; no transaction spans the page and the count.
    let total = store.count_notes(user_id).await?;

    tracing::info!(count = rows.len(), page, "Listed notes for user");

    Ok(Json(ListNotesResponse {
        notes: rows.into_iter().map(NotePreview::from).collect(),
        current: page,
        pages: total_pages(total, PER_PAGE),
        total,
    }))
}

/// GET /notes/{id} - Full note detail.
///
/// # Response
///
/// - 200 OK: the full note, untruncated
/// - 404 Not Found: no such note for this user (missing and
///   foreign-owned are reported identically)
async fn view_note(
    State(state): State<AppState>,
    UserIdentity(user_id): UserIdentity,
    Path(note_id): Path<NoteId>,
) -> ApiResult<Json<NoteResponse>> {
    let row = state.store().get_note(note_id, user_id).await?;
    Ok(Json(NoteResponse::from(row)))
}

/// POST /notes - Create a note owned by the authenticated user.
///
/// # Response
///
/// - 303 See Other → /notes
async fn create_note(
    State(state): State<AppState>,
    UserIdentity(user_id): UserIdentity,
    Json(payload): Json<NotePayload>,
) -> ApiResult<Redirect> {
    let new_note = NewNote::new(user_id, payload.title, payload.body);
    let row = state.store().insert_note(&new_note).await?;

    tracing::info!(note_id = %row.id, "Note created");

    Ok(Redirect::to("/notes"))
}

/// PUT /notes/{id} - Update a note's title and body.
///
/// A mismatched id or owner is a silent no-op: the caller is redirected
/// to the list either way and cannot tell "updated" from "nothing
/// matched".
///
/// # Response
///
/// - 303 See Other → /notes
async fn update_note(
    State(state): State<AppState>,
    UserIdentity(user_id): UserIdentity,
    Path(note_id): Path<NoteId>,
    Json(payload): Json<NotePayload>,
) -> ApiResult<Redirect> {
    let matched = state
        .store()
        .update_note(note_id, user_id, &payload.title, &payload.body)
        .await?;

    if matched == 0 {
        tracing::debug!(note_id = %note_id, "Update matched no note");
    } else {
        tracing::info!(note_id = %note_id, "Note updated");
    }

    Ok(Redirect::to("/notes"))
}

/// DELETE /notes/{id} - Delete a note.
///
/// Same silent no-op contract as update: deleting a missing or
/// foreign-owned note still redirects to the list.
///
/// # Response
///
/// - 303 See Other → /notes
async fn delete_note(
    State(state): State<AppState>,
    UserIdentity(user_id): UserIdentity,
    Path(note_id): Path<NoteId>,
) -> ApiResult<Redirect> {
    let removed = state.store().delete_note(note_id, user_id).await?;

    if removed == 0 {
        tracing::debug!(note_id = %note_id, "Delete matched no note");
    } else {
        tracing::info!(note_id = %note_id, "Note deleted");
    }

    Ok(Redirect::to("/notes"))
}

/// GET /notes/new - Empty form placeholder for the add-note page.
async fn new_note_form() -> Json<NoteFormResponse> {
    Json(NoteFormResponse::default())
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/new", get(new_note_form))
        .route(
            "/notes/{id}",
            get(view_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================
