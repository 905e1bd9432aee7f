//! Author profile record.
//!
//! An [`Author`] starts life either as a bare identifier (co-author and
//! placeholder stubs) or from one search-result entry, and is populated
//! section by section through [`Author::fill`].

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

use super::{CitesPerYear, Publication, Section};
use crate::config::{photo_url, scholar};
use crate::error::{ProfileError, ProfileResult};
use crate::extract::{
    ProfileDocument, SelectorTable, attr, select_all, select_marked,
    select_marked_first, text_of,
};

static USER_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"user=([\w-]+)").expect("valid regex"));

fn user_id_in(href: &str) -> Option<String> {
    USER_ID.captures(href).map(|caps| caps[1].to_string())
}

/// Extract the `user=<id>` value from a profile link.
pub(crate) fn user_id_from_link(href: &str) -> ProfileResult<String> {
    user_id_in(href).ok_or_else(|| ProfileError::identity(href))
}

/// An academic author profile.
///
/// Fields are only ever added or overwritten with freshly parsed values;
/// the identifier never changes.
#[derive(Debug, Clone)]
pub struct Author {
    pub(crate) id: String,
    pub(crate) name: Option<String>,
    pub(crate) affiliation: Option<String>,
    /// Normalised to `@domain`.
    pub(crate) email: Option<String>,
    pub(crate) interests: Option<Vec<String>>,
    pub(crate) url_picture: Option<String>,

    pub(crate) citedby: Option<u64>,
    pub(crate) citedby5y: Option<u64>,
    pub(crate) hindex: Option<u64>,
    pub(crate) hindex5y: Option<u64>,
    pub(crate) i10index: Option<u64>,
    pub(crate) i10index5y: Option<u64>,
    pub(crate) cites_per_year: Option<CitesPerYear>,

    pub(crate) coauthors: Option<Vec<Author>>,
    pub(crate) publications: Option<Vec<Publication>>,

    pub(crate) filled: BTreeSet<Section>,
}

impl Author {
    /// Stub record holding only an identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            affiliation: None,
            email: None,
            interests: None,
            url_picture: None,
            citedby: None,
            citedby5y: None,
            hindex: None,
            hindex5y: None,
            i10index: None,
            i10index5y: None,
            cites_per_year: None,
            coauthors: None,
            publications: None,
            filled: BTreeSet::new(),
        }
    }

    /// Build a record from one search-result entry.
    ///
    /// The identifier comes from the first link carrying `user=<id>`.
    /// Sets the identifier, picture URL and name; affiliation, email,
    /// interests and citation count only when the entry shows them. No
    /// section is marked filled.
    pub fn from_search_result(
        entry: ElementRef<'_>,
        selectors: &SelectorTable,
    ) -> ProfileResult<Self> {
        let links = select_all(entry, selectors.search_link)?;
        let hrefs: Vec<&str> = links.iter().filter_map(|link| attr(link, "href")).collect();
        let id = hrefs
            .iter()
            .find_map(|href| user_id_in(href))
            .ok_or_else(|| ProfileError::identity(hrefs.first().copied().unwrap_or_default()))?;

        let mut author = Self::new(id);
        author.url_picture = Some(photo_url(&author.id));

        let marker = selectors.search_name;
        let name = select_marked_first(entry, marker)?
            .ok_or_else(|| ProfileError::missing(format!("{} ~ {}", marker.tag, marker.marker)))?;
        author.name = Some(text_of(&name));

        if let Some(affiliation) = select_marked_first(entry, selectors.search_affiliation)? {
            author.affiliation = Some(text_of(&affiliation));
        }

        if let Some(email) = select_marked_first(entry, selectors.search_email)? {
            author.email = Some(text_of(&email).replace(scholar::EMAIL_PREFIX, "@"));
        }

        let interests = select_marked(entry, selectors.search_interests)?;
        if !interests.is_empty() {
            author.interests = Some(interests.iter().map(text_of).collect());
        }

        if let Some(cited_by) = select_marked_first(entry, selectors.search_cited_by)? {
            let text = text_of(&cited_by);
            if !text.is_empty() {
                let count: String = text.chars().skip(scholar::CITED_BY_LABEL_LEN).collect();
                let count = count.trim();
                author.citedby =
                    Some(count.parse().map_err(|_| ProfileError::invalid_number("citedby", text))?);
            }
        }

        Ok(author)
    }

    /// Build a record from the HTML of one search-result entry.
    pub fn parse_search_result(fragment: &str) -> ProfileResult<Self> {
        let document = ProfileDocument::parse_fragment(fragment);
        Self::from_search_result(document.root(), &SelectorTable::CURRENT)
    }

    /// Author identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Affiliation line.
    #[must_use]
    pub fn affiliation(&self) -> Option<&str> {
        self.affiliation.as_deref()
    }

    /// Verified email domain, as `@domain`.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Research interests in page order.
    #[must_use]
    pub fn interests(&self) -> Option<&[String]> {
        self.interests.as_deref()
    }

    /// Profile photo URL.
    #[must_use]
    pub fn url_picture(&self) -> Option<&str> {
        self.url_picture.as_deref()
    }

    /// Total citations.
    #[must_use]
    pub const fn citedby(&self) -> Option<u64> {
        self.citedby
    }

    /// Citations over the last five years.
    #[must_use]
    pub const fn citedby5y(&self) -> Option<u64> {
        self.citedby5y
    }

    /// h-index.
    #[must_use]
    pub const fn hindex(&self) -> Option<u64> {
        self.hindex
    }

    /// h-index over the last five years.
    #[must_use]
    pub const fn hindex5y(&self) -> Option<u64> {
        self.hindex5y
    }

    /// i10-index.
    #[must_use]
    pub const fn i10index(&self) -> Option<u64> {
        self.i10index
    }

    /// i10-index over the last five years.
    #[must_use]
    pub const fn i10index5y(&self) -> Option<u64> {
        self.i10index5y
    }

    /// Citations per year.
    #[must_use]
    pub fn cites_per_year(&self) -> Option<&CitesPerYear> {
        self.cites_per_year.as_ref()
    }

    /// Co-author stubs.
    #[must_use]
    pub fn coauthors(&self) -> Option<&[Author]> {
        self.coauthors.as_deref()
    }

    /// Publications across all pages, in site order.
    #[must_use]
    pub fn publications(&self) -> Option<&[Publication]> {
        self.publications.as_deref()
    }

    /// Whether every section has been filled explicitly.
    #[must_use]
    pub fn filled(&self) -> bool {
        Section::ALL.iter().all(|s| self.filled.contains(s))
    }

    /// Sections filled so far.
    pub fn filled_sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.filled.iter().copied()
    }

    /// Whether `section` has been filled.
    #[must_use]
    pub fn is_section_filled(&self, section: Section) -> bool {
        self.filled.contains(&section)
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::formatters::format_author_text(self))
    }
}

/// Every author entry on a search-results page.
pub fn parse_search_page(page: &str) -> ProfileResult<Vec<Author>> {
    let document = ProfileDocument::parse(page);
    let selectors = SelectorTable::CURRENT;

    select_all(document.root(), selectors.search_results)?
        .into_iter()
        .map(|entry| Author::from_search_result(entry, &selectors))
        .collect()
}
