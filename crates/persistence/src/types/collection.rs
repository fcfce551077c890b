//! The in-memory patient collection.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use super::patient::Patient;

/// All stored patients, keyed by id.
///
/// Serializes as a plain JSON object mapping id to record, which is exactly
/// the persisted document layout. Traversal order is ascending by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientCollection {
    records: BTreeMap<String, Patient>,
}

impl PatientCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by id.
    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.records.get(id)
    }

    /// Returns `true` if a record with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Iterates over `(id, patient)` pairs in traversal order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Patient> {
        self.records.iter()
    }

    /// Iterates over ids in traversal order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Inserts or replaces a record. Callers are responsible for validation.
    pub(crate) fn insert(&mut self, id: String, patient: Patient) -> Option<Patient> {
        self.records.insert(id, patient)
    }

    /// Removes a record.
    pub(crate) fn remove(&mut self, id: &str) -> Option<Patient> {
        self.records.remove(id)
    }
}

impl<'a> IntoIterator for &'a PatientCollection {
    type Item = (&'a String, &'a Patient);
    type IntoIter = btree_map::Iter<'a, String, Patient>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<(String, Patient)> for PatientCollection {
    fn from_iter<I: IntoIterator<Item = (String, Patient)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
