//! Core types for the bench result decoder library
//!
//! This module defines the fundamental types that the decoder emits when processing
//! result files. The decoder only groups values - it does not sort, aggregate or
//! interpret the measurements.

use serde::{Deserialize, Serialize};

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// One cached entry: the measurements written by a single benchmark client/thread
///
/// Values keep the order in which they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    values: Vec<f64>,
}

impl Group {
    /// Create a group from already collected values
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Values in sample order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values in this group
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.values.iter()
    }

    /// Consume the group and return its values
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

impl From<Vec<f64>> for Group {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Group {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// All groups of a result file, in the order they were encountered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    groups: Vec<Group>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a closed group
    pub fn push(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Total number of values across all groups
    pub fn total_values(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}

impl FromIterator<Group> for ResultSet {
    fn from_iter<T: IntoIterator<Item = Group>>(iter: T) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResultSet {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Errors that can occur during decoding
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("Malformed header: expected magic 0x{:08X}, found 0x{found:08X}", crate::formats::MAGIC)]
    MalformedHeader { found: u32 },

    #[error("Unexpected start marker: expected 0x{:08X}, found 0x{found:08X}", crate::formats::START_MARKER)]
    UnexpectedStartMarker { found: u32 },

    #[error("Result file ends inside an unterminated group ({values} values)")]
    UnterminatedGroup { values: usize },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
