//! Member names that are never forwarded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Name of the constructor member, excluded from every classification.
pub const CONSTRUCTOR: &str = "constructor";

/// Set of member names removed from classification regardless of their kind.
///
/// `ExclusionList::default()` contains only [`CONSTRUCTOR`]. A list built with
/// [`ExclusionList::from_names`] contains exactly the given names, which is
/// useful for loading configuration; [`crate::InspectorConfig::validate`]
/// rejects such a list if it lacks the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionList {
    names: BTreeSet<String>,
}

impl Default for ExclusionList {
    fn default() -> Self {
        Self::from_names([CONSTRUCTOR])
    }
}

impl ExclusionList {
    /// Exclusion list containing only `constructor`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusion list containing exactly `names`.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Builder-style method to add names.
    pub fn with<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add one name. Returns `false` if it was already excluded.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Excluded names, sorted.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
