//! Static seed for the category registry
//!
//! The seed mirrors the two tables the service starts from: the list of
//! valid categories and a mapping of category name to subtypes.
//!
//! ```json
//! {
//!   "categories": ["Billing", "Support"],
//!   "subtypes": { "Billing": ["Refund", "Invoice"] }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaxonomyError};
use crate::registry::CategoryRegistry;

/// Initial categories and subtypes loaded at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomySeed {
    /// Valid category names, in listing order
    #[serde(default)]
    pub categories: Vec<String>,

    /// Subtypes per category name
    #[serde(default)]
    pub subtypes: HashMap<String, Vec<String>>,
}

impl TaxonomySeed {
    /// Parse a seed from its JSON representation
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Add a category with its subtypes
    pub fn with_category<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        subtypes: impl IntoIterator<Item = S>,
    ) -> Self {
        let name = name.into();
        let subtypes: Vec<String> = subtypes.into_iter().map(Into::into).collect();
        if !subtypes.is_empty() {
            self.subtypes.insert(name.clone(), subtypes);
        }
        self.categories.push(name);
        self
    }

    /// Build the registry described by this seed
    pub fn into_registry(self) -> CategoryRegistry {
        CategoryRegistry::from_seed(self)
    }

    /// Reject seeds that name an empty category
    pub fn validate(&self) -> Result<()> {
        if self.categories.iter().any(String::is_empty) {
            return Err(TaxonomyError::EmptyCategoryName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_seed() {
        let seed = TaxonomySeed::from_json(
            r#"{"categories": ["Billing", "Support"], "subtypes": {"Billing": ["Refund"]}}"#,
        )
        .unwrap();

        assert_eq!(seed.categories, vec!["Billing", "Support"]);
        assert_eq!(seed.subtypes["Billing"], vec!["Refund"]);
    }

    #[test]
    fn test_parse_defaults() {
        let seed = TaxonomySeed::from_json("{}").unwrap();
        assert_eq!(seed, TaxonomySeed::default());
    }

    #[test]
    fn test_builder_matches_parsed() {
        let built = TaxonomySeed::default()
            .with_category("Billing", ["Refund"])
            .with_category("Support", Vec::<String>::new());
        let parsed = TaxonomySeed::from_json(
            r#"{"categories": ["Billing", "Support"], "subtypes": {"Billing": ["Refund"]}}"#,
        )
        .unwrap();

        assert_eq!(built, parsed);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let seed = TaxonomySeed::default().with_category("", ["x"]);
        assert!(seed.validate().is_err());
        assert!(TaxonomySeed::default().validate().is_ok());
    }

    #[test]
    fn test_into_registry() {
        let registry = TaxonomySeed::default()
            .with_category("Billing", ["Refund", "Refund"])
            .into_registry();

        assert_eq!(registry.list()[0].sub_request_type, vec!["Refund"]);
    }
}
