//! Ordered, toggleable sort-key lists.
//!
//! [`SortKeys`] is a plain value: callers own it, pass it into the sort
//! engine, and get it back. Toggling never reorders existing keys except to
//! shift them back when a new primary key is inserted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::{Column, SortDirection};
use crate::error::ModelError;
use crate::variant::ReportVariant;

/// One `(column, direction)` entry. Written as `"los"` or `"-los"` in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SortKey {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.column),
            SortDirection::Descending => write!(f, "-{}", self.column),
        }
    }
}

impl FromStr for SortKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.strip_prefix('-') {
            Some(rest) => Ok(Self::descending(rest.parse()?)),
            None => Ok(Self::ascending(trimmed.trim_start_matches('+').parse()?)),
        }
    }
}

impl TryFrom<String> for SortKey {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortKey> for String {
    fn from(value: SortKey) -> Self {
        value.to_string()
    }
}

/// Ordered sort keys; the first entry is the primary key.
///
/// Each column appears at most once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SortKey>", into = "Vec<SortKey>")]
pub struct SortKeys(Vec<SortKey>);

impl SortKeys {
    pub fn new(keys: Vec<SortKey>) -> Result<Self, ModelError> {
        for (idx, key) in keys.iter().enumerate() {
            if keys[..idx].iter().any(|prev| prev.column == key.column) {
                return Err(ModelError::DuplicateSortColumn(key.column.to_string()));
            }
        }
        Ok(Self(keys))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The fixed default list for a report variant.
    pub fn reset(variant: ReportVariant) -> Self {
        variant.default_sort_keys()
    }

    pub fn as_slice(&self) -> &[SortKey] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortKey> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, column: Column) -> Option<usize> {
        self.0.iter().position(|key| key.column == column)
    }

    /// Flip the direction of `column` in place, or insert it as the new
    /// ascending primary key if absent.
    pub fn toggle(&mut self, column: Column) {
        match self.position(column) {
            Some(idx) => {
                let key = &mut self.0[idx];
                key.direction = key.direction.flipped();
            }
            None => self.0.insert(0, SortKey::ascending(column)),
        }
    }

    /// Append `key` unless its column is already present.
    pub(crate) fn push_unique(&mut self, key: SortKey) {
        if self.position(key.column).is_none() {
            self.0.push(key);
        }
    }

    /// By-value form of [`SortKeys::toggle`].
    #[must_use]
    pub fn toggled(mut self, column: Column) -> Self {
        self.toggle(column);
        self
    }
}

impl TryFrom<Vec<SortKey>> for SortKeys {
    type Error = ModelError;

    fn try_from(value: Vec<SortKey>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SortKeys> for Vec<SortKey> {
    fn from(value: SortKeys) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a SortKeys {
    type Item = &'a SortKey;
    type IntoIter = std::slice::Iter<'a, SortKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for SortKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for key in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
            first = false;
        }
        Ok(())
    }
}
