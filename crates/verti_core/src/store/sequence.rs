//! Append-only ordered record sequence.

use serde::{Deserialize, Serialize};

/// Ordered, append-only list of records of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSeq<T> {
    records: Vec<T>,
}

impl<T> Default for RecordSeq<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T> RecordSeq<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record at the end. Never fails.
    pub fn append(&mut self, record: T) {
        self.records.push(record);
    }

    /// Returns all records in append order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<'a, T> IntoIterator for &'a RecordSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
