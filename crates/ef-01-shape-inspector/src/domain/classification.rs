//! Forwarding tables computed for one wrapped-object shape.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Accessor and method names of one wrapped-object shape.
///
/// Invariants:
/// - both lists are sorted and free of duplicates
/// - a name appears in at most one list
/// - read-only names are a subset of the accessor names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberClassification {
    accessor_names: Vec<String>,
    method_names: Vec<String>,
    read_only: BTreeSet<String>,
}

impl MemberClassification {
    /// Build a classification from raw name lists.
    ///
    /// Lists are sorted and deduplicated. A name given as both accessor and
    /// method stays an accessor; read-only names that are not accessors are
    /// dropped.
    pub fn from_parts<A, M, R>(accessors: A, methods: M, read_only: R) -> Self
    where
        A: IntoIterator<Item = String>,
        M: IntoIterator<Item = String>,
        R: IntoIterator<Item = String>,
    {
        let accessors: BTreeSet<String> = accessors.into_iter().collect();
        let methods: BTreeSet<String> = methods
            .into_iter()
            .filter(|name| !accessors.contains(name))
            .collect();
        let read_only = read_only
            .into_iter()
            .filter(|name| accessors.contains(name))
            .collect();

        Self {
            accessor_names: accessors.into_iter().collect(),
            method_names: methods.into_iter().collect(),
            read_only,
        }
    }

    /// Forwarded accessor names, sorted.
    pub fn accessor_names(&self) -> &[String] {
        &self.accessor_names
    }

    /// Forwarded method names, sorted.
    pub fn method_names(&self) -> &[String] {
        &self.method_names
    }

    pub fn is_accessor(&self, name: &str) -> bool {
        self.accessor_names
            .binary_search_by(|candidate| candidate.as_str().cmp(name))
            .is_ok()
    }

    pub fn is_method(&self, name: &str) -> bool {
        self.method_names
            .binary_search_by(|candidate| candidate.as_str().cmp(name))
            .is_ok()
    }

    /// Whether `name` is an accessor with a setter.
    pub fn is_writable(&self, name: &str) -> bool {
        self.is_accessor(name) && !self.read_only.contains(name)
    }

    /// Number of forwarded members.
    pub fn len(&self) -> usize {
        self.accessor_names.len() + self.method_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of this classification without `names`.
    ///
    /// The facade builder uses this to keep `on<kind>` slot properties of
    /// declared kinds out of accessor forwarding.
    pub fn without<'a, I>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let removed: BTreeSet<&str> = names.into_iter().collect();
        let keep = |name: &&String| !removed.contains(name.as_str());

        Self {
            accessor_names: self.accessor_names.iter().filter(keep).cloned().collect(),
            method_names: self.method_names.iter().filter(keep).cloned().collect(),
            read_only: self.read_only.iter().filter(keep).cloned().collect(),
        }
    }
}
