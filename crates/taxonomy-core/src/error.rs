//! Error types for the category taxonomy

use thiserror::Error;

/// Result type alias using TaxonomyError
pub type Result<T> = std::result::Result<T, TaxonomyError>;

/// Errors that can occur when mutating the taxonomy
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// Every requested subtype is already stored for an existing category
    #[error("This request type with the same sub-request types already exists.")]
    DuplicateCategory { category: String },

    /// Category names are identifiers and cannot be blank
    #[error("Request type cannot be empty")]
    EmptyCategoryName,
}
