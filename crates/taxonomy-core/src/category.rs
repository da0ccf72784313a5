//! Categories and their subtype sets
//!
//! A category (request type) carries a set of subtypes (sub-request types).
//! Subtypes keep insertion order so that every listing renders the same way,
//! but membership is what matters: duplicates are dropped on every write.

use serde::Serialize;

/// Placeholder subtype for categories without any stored subtypes
pub const NOT_APPLICABLE: &str = "N/A";

/// An insertion-ordered, deduplicated set of subtype names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtypeSet {
    names: Vec<String>,
}

impl SubtypeSet {
    /// Create a new empty subtype set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from names, keeping the first occurrence of each
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.merge(names);
        set
    }

    /// Check if the set contains a subtype
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Check if every requested name is already present
    ///
    /// An empty request is always covered.
    pub fn is_superset_of<S: AsRef<str>>(&self, requested: &[S]) -> bool {
        requested.iter().all(|name| self.contains(name.as_ref()))
    }

    /// Union `names` into the set, returning the names that were newly added
    pub fn merge<I, S>(&mut self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = Vec::new();
        for name in names {
            let name = name.into();
            if !self.contains(&name) {
                self.names.push(name.clone());
                added.push(name);
            }
        }
        added
    }

    /// Stored subtypes, or `["N/A"]` when nothing is stored
    pub fn read_view(&self) -> Vec<String> {
        if self.names.is_empty() {
            vec![NOT_APPLICABLE.to_string()]
        } else {
            self.names.clone()
        }
    }

    /// Get the stored names
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Get the number of stored subtypes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no subtypes are stored
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A named category with its subtypes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique category name
    pub name: String,
    /// Stored subtypes; empty means none were ever stored
    pub subtypes: SubtypeSet,
}

impl Category {
    /// Create a category with no stored subtypes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subtypes: SubtypeSet::new(),
        }
    }

    /// Attach subtypes to the category
    pub fn with_subtypes(mut self, subtypes: SubtypeSet) -> Self {
        self.subtypes = subtypes;
        self
    }
}

/// One row of a category listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// 1-based position in the listing
    pub id: usize,
    /// Category name
    pub request_type: String,
    /// Subtype names (`["N/A"]` if none are stored)
    pub sub_request_type: Vec<String>,
}
