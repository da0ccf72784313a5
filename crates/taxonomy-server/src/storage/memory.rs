//! In-memory storage backend
//!
//! Default storage implementation wrapping a [`CategoryRegistry`] in a lock.
//! Data is lost on restart.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use taxonomy_core::{CategoryRecord, CategoryRegistry, TaxonomySeed, UpsertOutcome};
use tracing::{debug, info};

use super::{CategoryStore, StorageError, UpsertReceipt};

/// In-memory category store
#[derive(Debug, Default)]
pub struct MemoryStore {
    registry: RwLock<CategoryRegistry>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an existing registry
    pub fn with_registry(registry: CategoryRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Create a store populated from a seed
    pub fn from_seed(seed: TaxonomySeed) -> Self {
        let registry = seed.into_registry();
        info!(categories = registry.len(), "Seeded category registry");
        Self::with_registry(registry)
    }
}

fn poisoned<T>(err: PoisonError<T>) -> StorageError {
    StorageError::LockPoisoned(err.to_string())
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, StorageError> {
        let registry = self.registry.read().map_err(poisoned)?;
        Ok(registry.list())
    }

    async fn upsert_category(
        &self,
        category: &str,
        subtypes: &[String],
    ) -> Result<UpsertReceipt, StorageError> {
        let mut registry = self.registry.write().map_err(poisoned)?;
        let outcome = registry.upsert(category, subtypes)?;

        match &outcome {
            UpsertOutcome::Created { category } => {
                info!(category = %category, subtypes = ?subtypes, "Added category");
            }
            UpsertOutcome::Merged { category, added } => {
                info!(category = %category, added = ?added, "Merged subtypes into category");
            }
        }
        debug!(categories = registry.len(), "Registry updated");

        Ok(UpsertReceipt {
            outcome,
            categories: registry.mapping(),
        })
    }

    async fn category_mapping(&self) -> Result<BTreeMap<String, Vec<String>>, StorageError> {
        let registry = self.registry.read().map_err(poisoned)?;
        Ok(registry.mapping())
    }

    async fn category_count(&self) -> Result<usize, StorageError> {
        let registry = self.registry.read().map_err(poisoned)?;
        Ok(registry.len())
    }
}
