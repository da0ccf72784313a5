//! Storage abstraction for the taxonomy service
//!
//! This module provides a trait-based abstraction over the category registry.
//! The in-memory backend is the only one: state lives for the life of the
//! process and is lost on restart.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::fmt::Debug;
use taxonomy_core::{CategoryRecord, TaxonomyError, UpsertOutcome};

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error(transparent)]
    Rejected(#[from] TaxonomyError),

    #[error("Registry lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Outcome of an upsert together with the registry contents right after it
#[derive(Debug, Clone)]
pub struct UpsertReceipt {
    /// What the write did
    pub outcome: UpsertOutcome,
    /// Every category mapped to its subtypes, captured under the same lock
    pub categories: BTreeMap<String, Vec<String>>,
}

/// Storage backend trait for the category registry
///
/// Implementations must be thread-safe and must apply each upsert as a
/// single read-modify-write so concurrent writers cannot lose updates.
#[async_trait]
pub trait CategoryStore: Send + Sync + Debug {
    /// List every category with its listing id
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, StorageError>;

    /// Insert a category or merge subtypes into an existing one
    async fn upsert_category(
        &self,
        category: &str,
        subtypes: &[String],
    ) -> Result<UpsertReceipt, StorageError>;

    /// Every category mapped to its subtypes
    async fn category_mapping(&self) -> Result<BTreeMap<String, Vec<String>>, StorageError>;

    /// Number of registered categories
    async fn category_count(&self) -> Result<usize, StorageError>;
}
