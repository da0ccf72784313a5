//! Category Handlers
//!
//! Listing and upserting request-type categories.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use taxonomy_core::{CategoryRecord, UpsertOutcome};

use crate::api::error::ApiError;
use crate::api::handlers::AppState;

/// Confirmation message for a successful upsert
pub const CATEGORY_ADDED: &str = "Category added successfully";

/// Response listing every category
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    /// Categories in listing order
    pub categories: Vec<CategoryRecord>,
}

/// Request to add a category or merge new subtypes into it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCategoryRequest {
    /// Category name
    pub request_type: String,

    /// Subtypes to add
    #[serde(default)]
    pub sub_request_type: Vec<String>,
}

/// Response from a successful upsert
#[derive(Debug, Serialize)]
pub struct AddCategoryResponse {
    /// Confirmation message
    pub message: String,

    /// Every category mapped to its subtypes after the write
    pub categories: BTreeMap<String, Vec<String>>,
}

/// List categories with their subtypes
///
/// GET /categories
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListCategoriesResponse>, ApiError> {
    let categories = state.store.list_categories().await?;
    Ok(Json(ListCategoriesResponse { categories }))
}

/// Add a category, or merge new subtypes into an existing one
///
/// POST /add-category
///
/// Rejected with 400 when the category name is empty, or when the category
/// exists and already holds every requested subtype, including when no
/// subtypes are requested.
pub async fn add_category(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddCategoryRequest>,
) -> Result<Json<AddCategoryResponse>, ApiError> {
    let receipt = state
        .store
        .upsert_category(&request.request_type, &request.sub_request_type)
        .await?;

    match &receipt.outcome {
        UpsertOutcome::Created { category } => {
            info!(category = %category, "Created category via API");
        }
        UpsertOutcome::Merged { category, added } => {
            info!(category = %category, added = added.len(), "Extended category via API");
        }
    }

    Ok(Json(AddCategoryResponse {
        message: CATEGORY_ADDED.into(),
        categories: receipt.categories,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_subtypes() {
        let request: AddCategoryRequest =
            serde_json::from_str(r#"{"requestType": "Billing"}"#).unwrap();
        assert_eq!(request.request_type, "Billing");
        assert!(request.sub_request_type.is_empty());
    }

    #[test]
    fn test_request_rejects_wrong_shape() {
        let result: Result<AddCategoryRequest, _> =
            serde_json::from_str(r#"{"requestType": "Billing", "subRequestType": "Refund"}"#);
        assert!(result.is_err());
    }
}
