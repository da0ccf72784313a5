//! API request handlers

pub mod categories;

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::storage::CategoryStore;

pub use categories::{
    add_category, list_categories, AddCategoryRequest, AddCategoryResponse,
    ListCategoriesResponse, CATEGORY_ADDED,
};

/// Application state shared across handlers
#[derive(Debug)]
pub struct AppState {
    /// Category storage backend
    pub store: Arc<dyn CategoryStore>,
    /// Server configuration
    pub config: ServerConfig,
}
