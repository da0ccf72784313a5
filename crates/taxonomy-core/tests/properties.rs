//! Property-Based Tests for Registry Invariants
//!
//! These tests verify that the upsert contract holds for arbitrary inputs:
//! 1. UNIQUENESS: a category is listed once no matter how often it is written
//! 2. SET SEMANTICS: stored subtypes never contain duplicates
//! 3. GROWTH ONLY: a merge never drops a previously stored subtype
//! 4. ATOMIC REJECTION: a duplicate upsert leaves the registry unchanged
//!
//! Uses proptest for property-based testing with arbitrary inputs.

use std::collections::BTreeSet;

use proptest::prelude::*;
use taxonomy_core::{CategoryRegistry, TaxonomyError, NOT_APPLICABLE};

fn subtype_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,2}", 0..6)
}

fn stored(registry: &CategoryRegistry, name: &str) -> BTreeSet<String> {
    registry
        .subtypes(name)
        .map(|s| s.names().iter().cloned().collect())
        .unwrap_or_default()
}

// =============================================================================
// UNIQUENESS and SET SEMANTICS
// =============================================================================

proptest! {
    /// Any sequence of upserts keeps one entry per category and no duplicate subtypes
    #[test]
    fn prop_listing_is_unique(
        writes in prop::collection::vec(("[A-C]", subtype_list()), 1..20),
    ) {
        let mut registry = CategoryRegistry::new();
        for (category, subtypes) in &writes {
            let _ = registry.upsert(category, subtypes);
        }

        let listed = registry.list();
        let names: BTreeSet<_> = listed.iter().map(|r| r.request_type.clone()).collect();
        prop_assert_eq!(names.len(), listed.len(), "category listed twice");

        for (i, record) in listed.iter().enumerate() {
            prop_assert_eq!(record.id, i + 1);
            let unique: BTreeSet<_> = record.sub_request_type.iter().collect();
            prop_assert_eq!(unique.len(), record.sub_request_type.len(), "duplicate subtype");
        }
    }

    /// A category is listed only if some upsert named it
    #[test]
    fn prop_unknown_categories_never_listed(
        writes in prop::collection::vec(("[A-C]", subtype_list()), 0..10),
        probe in "[D-F]",
    ) {
        let mut registry = CategoryRegistry::new();
        for (category, subtypes) in &writes {
            let _ = registry.upsert(category, subtypes);
        }

        prop_assert!(!registry.contains(&probe));
        prop_assert!(registry.list().iter().all(|r| r.request_type != probe));
    }
}

// =============================================================================
// GROWTH ONLY and ATOMIC REJECTION
// =============================================================================

proptest! {
    /// Upserting into an existing category yields the union, or rejects a covered request
    #[test]
    fn prop_upsert_is_union_or_duplicate(
        initial in subtype_list(),
        requested in subtype_list(),
    ) {
        let mut registry = CategoryRegistry::new();
        registry.upsert("c", &initial).expect("new category must be accepted");

        let before = stored(&registry, "c");
        let snapshot = registry.list();
        let requested_set: BTreeSet<String> = requested.iter().cloned().collect();

        match registry.upsert("c", &requested) {
            Ok(_) => {
                prop_assert!(!requested_set.is_subset(&before));
                let expected: BTreeSet<_> = before.union(&requested_set).cloned().collect();
                prop_assert_eq!(stored(&registry, "c"), expected);
            }
            Err(TaxonomyError::DuplicateCategory { category }) => {
                prop_assert_eq!(category, "c");
                prop_assert!(requested_set.is_subset(&before));
                prop_assert_eq!(registry.list(), snapshot, "rejected upsert mutated the registry");
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// A new category stores exactly its requested set, or the placeholder
    #[test]
    fn prop_create_stores_requested(requested in subtype_list()) {
        let mut registry = CategoryRegistry::new();
        registry.upsert("c", &requested).expect("new category must be accepted");

        let expected: BTreeSet<String> = if requested.is_empty() {
            BTreeSet::from([NOT_APPLICABLE.to_string()])
        } else {
            requested.into_iter().collect()
        };
        prop_assert_eq!(stored(&registry, "c"), expected);
    }
}
