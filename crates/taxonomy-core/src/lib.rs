//! # Taxonomy Core
//!
//! Domain types for a small request-type taxonomy: categories (request types)
//! and the subtypes (sub-request types) nested under them.
//!
//! ## Key Concepts
//!
//! - **Category**: top-level classification label, unique by name
//! - **Subtype**: secondary label, unique within its category
//! - **Registry**: the ordered in-memory store of categories
//! - **Upsert**: insert a new category, or union new subtypes into an existing one
//!
//! ## Registry Invariants
//!
//! 1. **Uniqueness**: each category appears once, with at most one subtype set
//! 2. **Set semantics**: subtypes are deduplicated on every write
//! 3. **Growth only**: categories and subtypes are never removed
//! 4. **Stable ids**: listing ids follow insertion order

pub mod category;
pub mod error;
pub mod registry;
pub mod seed;

pub use category::{Category, CategoryRecord, SubtypeSet, NOT_APPLICABLE};
pub use error::{Result, TaxonomyError};
pub use registry::{CategoryRegistry, UpsertOutcome};
pub use seed::TaxonomySeed;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
