//! Publication entries harvested from a profile's citation table.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use crate::extract::{SelectorTable, attr, select_all, select_first, text_of};
use crate::error::{ProfileError, ProfileResult};

static CITATION_FOR_VIEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"citation_for_view=([\w-]*:[\w-]*)").expect("valid regex"));

/// Section of the site a publication entry was harvested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicationSource {
    /// A row of an author's citations table.
    Citations,
}

impl PublicationSource {
    /// Tag name of the source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Citations => "citations",
        }
    }
}

/// A publication listed on an author profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publication {
    /// Title as shown in the row.
    pub title: String,

    /// `<author>:<publication>` identifier from the row link.
    pub author_pub_id: Option<String>,

    /// Author line, abbreviated by the site.
    pub authors: Option<String>,

    /// Venue line (journal, conference, volume).
    pub venue: Option<String>,

    /// Citation count; unset when the row shows none.
    pub citedby: Option<u64>,

    /// Publication year.
    pub year: Option<i32>,

    /// Where the entry came from.
    pub source: PublicationSource,

    /// Whether the publication detail page has been loaded.
    pub filled: bool,
}

impl Publication {
    /// Build an unfilled publication from one citation-table row.
    pub fn from_citation_row(
        row: ElementRef<'_>,
        source: PublicationSource,
        selectors: &SelectorTable,
    ) -> ProfileResult<Self> {
        let title_link = select_first(row, selectors.publication_title)?
            .ok_or_else(|| ProfileError::missing(selectors.publication_title))?;

        let author_pub_id = attr(&title_link, "href")
            .and_then(|href| CITATION_FOR_VIEW.captures(href))
            .map(|caps| caps[1].to_string());

        let mut meta = select_all(row, selectors.publication_meta)?.into_iter().map(|el| text_of(&el));
        let authors = meta.next().filter(|s| !s.is_empty());
        let venue = meta.next().filter(|s| !s.is_empty());

        let citedby = match select_first(row, selectors.publication_cited_by)?.map(|el| text_of(&el)) {
            Some(text) if !text.is_empty() => Some(
                text.parse().map_err(|_| ProfileError::invalid_number("publication citedby", text))?,
            ),
            _ => None,
        };

        let year = match select_first(row, selectors.publication_year)?.map(|el| text_of(&el)) {
            Some(text) if !text.is_empty() => {
                Some(text.parse().map_err(|_| ProfileError::invalid_number("publication year", text))?)
            }
            _ => None,
        };

        Ok(Self {
            title: text_of(&title_link),
            author_pub_id,
            authors,
            venue,
            citedby,
            year,
            source,
            filled: false,
        })
    }
}
