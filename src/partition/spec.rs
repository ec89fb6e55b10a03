//! Partition spec: column name -> literal text
//!
//! Keys are kept in sorted order so that iteration and serialized
//! output are deterministic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Column-name to literal-text assignments identifying one partition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionSpec {
    values: BTreeMap<String, String>,
}

impl PartitionSpec {
    /// Create an empty spec
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the literal text for a column, returning the previous text
    pub fn insert(&mut self, column: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.values.insert(column.into(), text.into())
    }

    /// Literal text for a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate entries in column-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Column names in sorted order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PartitionSpec {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for PartitionSpec {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<PartitionSpec> for BTreeMap<String, String> {
    fn from(spec: PartitionSpec) -> Self {
        spec.values
    }
}
