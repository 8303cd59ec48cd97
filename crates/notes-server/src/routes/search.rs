//! Note search routes.
//!
//! - GET /search - Empty result placeholder for initial render
//! - POST /search - Case-insensitive substring search over the user's notes
//!
//! The search term is sanitized in the store before it touches SQL pattern
//! matching; see `notes_core::sanitize_search_term`. Results are unbounded,
//! matching the list-less contract of the original page.

use axum::{Json, Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::extract::UserIdentity;
use crate::routes::notes::NoteResponse;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Raw search term; sanitized before matching.
    pub search_term: String,
}

/// Response for both search endpoints.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Matched notes, newest edit first. Empty on the initial form render.
    pub results: Vec<NoteResponse>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /search - Empty search page placeholder.
async fn search_form() -> Json<SearchResponse> {
    Json(SearchResponse {
        results: Vec::new(),
    })
}

/// POST /search - Run a search over the user's notes.
///
/// An empty term, or one that was all special characters, matches every
/// note the user owns.
///
/// # Response
///
/// - 200 OK: `{ "results": [...] }`
async fn search_submit(
    State(state): State<AppState>,
    UserIdentity(user_id): UserIdentity,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Json<SearchResponse>> {
    let rows = state
        .store()
        .search_notes(user_id, &request.search_term)
        .await?;

    tracing::info!(matches = rows.len(), "Search completed");

    Ok(Json(SearchResponse {
        results: rows.into_iter().map(NoteResponse::from).collect(),
    }))
}

/// Build search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/search", get(search_form).post(search_submit))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_form_is_empty() {
        let response = search_form().await;
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_search_request_deserialize() {
        let json = r#"{"search_term": "abc<script>"}"#;
        let request: SearchRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.search_term, "abc<script>");
    }

    #[test]
    fn test_search_response_serialize() {
        let response = SearchResponse {
            results: Vec::new(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"results":[]}"#);
    }
}
