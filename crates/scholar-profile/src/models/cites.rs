//! Citations-per-year mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Year → citation count, kept in document order.
///
/// Inserting a year that is already present replaces its count in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitesPerYear {
    entries: Vec<(i32, u64)>,
}

impl CitesPerYear {
    /// Empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair years with counts positionally, truncating to the shorter list.
    pub fn from_pairs(years: impl IntoIterator<Item = i32>, counts: impl IntoIterator<Item = u64>) -> Self {
        let mut map = Self::new();
        for (year, count) in years.into_iter().zip(counts) {
            map.insert(year, count);
        }
        map
    }

    /// Insert or replace the count for `year`.
    pub fn insert(&mut self, year: i32, count: u64) {
        match self.entries.iter_mut().find(|(y, _)| *y == year) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((year, count)),
        }
    }

    /// Count for `year`.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<u64> {
        self.entries.iter().find(|(y, _)| *y == year).map(|(_, c)| *c)
    }

    /// Number of years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no year is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(year, count)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}

impl FromIterator<(i32, u64)> for CitesPerYear {
    fn from_iter<I: IntoIterator<Item = (i32, u64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (year, count) in iter {
            map.insert(year, count);
        }
        map
    }
}

impl Serialize for CitesPerYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (year, count) in &self.entries {
            map.serialize_entry(year, count)?;
        }
        map.end()
    }
}
