//! Taxonomy Server
//!
//! HTTP service over an in-memory taxonomy of request types (categories)
//! and their sub-request types (subtypes). State is seeded once at startup
//! and only grows through upserts; nothing is persisted.
//!
//! ## API Endpoints
//!
//! - `GET /health` - Liveness check
//! - `GET /ready` - Readiness check with category count
//! - `GET /categories` - List categories with 1-based ids and their subtypes
//! - `POST /add-category` - Add a category or merge new subtypes into it

pub mod api;
pub mod config;
pub mod storage;

pub use api::create_router;
pub use api::handlers::AppState;
pub use config::{ConfigError, ServerConfig};
pub use storage::{CategoryStore, MemoryStore, StorageError, UpsertReceipt};
