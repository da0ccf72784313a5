//! Category Registry
//!
//! The registry owns every known category in insertion order. Listing ids
//! are derived from that order, so they are stable between calls as long as
//! no category is added in between.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::category::{Category, CategoryRecord, SubtypeSet, NOT_APPLICABLE};
use crate::error::{Result, TaxonomyError};
use crate::seed::TaxonomySeed;

/// Result of a successful upsert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new category was added
    Created { category: String },
    /// New subtypes were merged into an existing category
    Merged { category: String, added: Vec<String> },
}

impl UpsertOutcome {
    /// Name of the category that was written
    pub fn category(&self) -> &str {
        match self {
            UpsertOutcome::Created { category } | UpsertOutcome::Merged { category, .. } => {
                category
            }
        }
    }
}

/// Ordered in-memory store of categories and their subtypes
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    /// Categories in insertion order
    categories: Vec<Category>,
    /// Category name -> position in `categories`
    index: HashMap<String, usize>,
}

impl CategoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a static seed
    ///
    /// Categories are added in seed order. Empty names, and subtype entries
    /// keyed by a name that is not a seeded category, are skipped.
    pub fn from_seed(seed: TaxonomySeed) -> Self {
        let TaxonomySeed {
            categories,
            mut subtypes,
        } = seed;

        let mut registry = Self::new();
        for name in categories {
            if name.is_empty() {
                warn!("Ignoring seed category with an empty name");
                subtypes.remove(&name);
                continue;
            }
            if registry.contains(&name) {
                continue;
            }
            let stored = subtypes
                .remove(&name)
                .map(SubtypeSet::from_names)
                .unwrap_or_default();
            registry.insert(Category::new(name).with_subtypes(stored));
        }

        for orphan in subtypes.keys() {
            warn!(category = %orphan, "Ignoring seed subtypes for unlisted category");
        }

        registry
    }

    fn insert(&mut self, category: Category) {
        self.index
            .insert(category.name.clone(), self.categories.len());
        self.categories.push(category);
    }

    fn get(&self, name: &str) -> Option<&Category> {
        self.index.get(name).map(|&i| &self.categories[i])
    }

    /// Check if a category is registered
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Stored subtypes for a category, if the category exists
    pub fn subtypes(&self, name: &str) -> Option<&SubtypeSet> {
        self.get(name).map(|c| &c.subtypes)
    }

    /// Get the number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the registry has no categories
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// List every category with a 1-based id in insertion order
    pub fn list(&self) -> Vec<CategoryRecord> {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, c)| CategoryRecord {
                id: i + 1,
                request_type: c.name.clone(),
                sub_request_type: c.subtypes.read_view(),
            })
            .collect()
    }

    /// Map of every category to its subtypes (`["N/A"]` if none are stored)
    pub fn mapping(&self) -> BTreeMap<String, Vec<String>> {
        self.categories
            .iter()
            .map(|c| (c.name.clone(), c.subtypes.read_view()))
            .collect()
    }

    /// Insert a category or merge subtypes into an existing one
    ///
    /// Fails with [`TaxonomyError::DuplicateCategory`] when the category
    /// exists and already holds every requested subtype. An empty request
    /// against an existing category is therefore always a duplicate.
    /// The registry is left untouched on error.
    pub fn upsert<S: AsRef<str>>(&mut self, category: &str, subtypes: &[S]) -> Result<UpsertOutcome> {
        if category.is_empty() {
            return Err(TaxonomyError::EmptyCategoryName);
        }

        let requested = subtypes.iter().map(|s| s.as_ref().to_string());

        match self.index.get(category) {
            Some(&i) => {
                let existing = &mut self.categories[i].subtypes;
                if existing.is_superset_of(subtypes) {
                    debug!(category = %category, "Rejecting upsert covered by existing subtypes");
                    return Err(TaxonomyError::DuplicateCategory {
                        category: category.to_string(),
                    });
                }

                let added = existing.merge(requested);
                Ok(UpsertOutcome::Merged {
                    category: category.to_string(),
                    added,
                })
            }
            None => {
                let stored = if subtypes.is_empty() {
                    SubtypeSet::from_names([NOT_APPLICABLE])
                } else {
                    SubtypeSet::from_names(requested)
                };
                self.insert(Category::new(category).with_subtypes(stored));

                Ok(UpsertOutcome::Created {
                    category: category.to_string(),
                })
            }
        }
    }
}
