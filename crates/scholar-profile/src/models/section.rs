//! Profile sections that can be filled independently.

use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// One named category of author data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Name, affiliation and interests.
    Basics,
    /// Citation, h-index and i10-index metrics (all-time and 5-year).
    Indices,
    /// Citations per year.
    Counts,
    /// Co-author stubs.
    Coauthors,
    /// Publication list, across all pages.
    Publications,
}

impl Section {
    /// Every section, in fill order.
    pub const ALL: [Self; 5] =
        [Self::Basics, Self::Indices, Self::Counts, Self::Coauthors, Self::Publications];

    /// Case-insensitive lookup; `None` for unrecognised names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
    }

    /// Lowercase section name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basics => "basics",
            Self::Indices => "indices",
            Self::Counts => "counts",
            Self::Coauthors => "coauthors",
            Self::Publications => "publications",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ProfileError::UnknownSection(s.to_string()))
    }
}
