//! notes-server: HTTP server for the notes service
//!
//! This crate provides:
//! - Note CRUD and search endpoints, all owner-scoped
//! - Session-token validation (identity is issued externally)
//! - Pagination and display truncation for list pages
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use notes_server::{config::ServerConfig, routes, state::AppState};
//! use notes_store::{Store, StoreConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env()?;
//!     let store = Store::connect(StoreConfig::from_env()?).await?;
//!     let app = routes::build_router(AppState::new(store, config));
//!     // serve `app`...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use extract::UserIdentity;
pub use state::AppState;

// Re-export dependent crates
pub use notes_core;
pub use notes_store;
