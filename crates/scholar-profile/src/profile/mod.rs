//! Section-scoped filling of an [`Author`] from their profile page.
//!
//! One call to [`Author::fill`] fetches the profile page once and runs the
//! requested section parsers against it. The publications section fetches
//! further pages of its own through [`Paginator`].
//!
//! Sections run in the order requested, and a failure stops the fill at that
//! section. Parsed pages are never held across an `.await`: when publications
//! come up, their first page is harvested, the parse is dropped while the
//! remaining pages are fetched, and the first page is parsed again for any
//! sections after it. The publications section is marked filled once its
//! last page is in.

pub mod coauthors;
pub mod pagination;
pub mod sections;

pub use coauthors::parse_coauthors;
pub use pagination::{PageHarvest, Paginator, harvest_page};
pub use sections::{parse_basics, parse_counts, parse_indices};

use crate::client::DocumentFetcher;
use crate::config::first_page_path;
use crate::error::ProfileResult;
use crate::extract::{ProfileDocument, SelectorTable};
use crate::models::{Author, Section};

/// Which sections a fill should cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillRequest {
    /// Every section, re-parsed regardless of what is already filled.
    /// The filled set is left untouched.
    All,
    /// The listed sections; already-filled ones are skipped and the rest are
    /// marked filled once parsed.
    Only(Vec<Section>),
}

impl FillRequest {
    /// Build a request from case-insensitive section names.
    ///
    /// An empty list means every section. Unrecognised names are skipped.
    #[must_use]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        if names.is_empty() {
            return Self::All;
        }

        let sections = names
            .iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let section = Section::from_name(name);
                if section.is_none() {
                    tracing::warn!(section = %name, "Ignoring unknown profile section");
                }
                section
            })
            .collect();

        Self::Only(sections)
    }

    /// Sections to visit, in order, and whether to record them as filled.
    fn plan(&self) -> (Vec<Section>, bool) {
        match self {
            Self::All => (Section::ALL.to_vec(), false),
            Self::Only(sections) => (sections.clone(), true),
        }
    }
}

impl Author {
    /// Populate the requested sections from the author's profile.
    ///
    /// `sections` are case-insensitive names out of `basics`, `indices`,
    /// `counts`, `coauthors` and `publications`; an empty slice fills all of
    /// them without recording them as filled.
    ///
    /// # Errors
    ///
    /// Any fetch or parse failure is returned as is. A failed first fetch
    /// leaves the record untouched; a failing parser may leave its section
    /// partially written but never marked filled.
    pub async fn fill<F, S>(&mut self, fetcher: &F, sections: &[S]) -> ProfileResult<&mut Self>
    where
        F: DocumentFetcher + ?Sized,
        S: AsRef<str> + Sync,
    {
        self.fill_with(fetcher, FillRequest::from_names(sections), &SelectorTable::CURRENT).await
    }

    /// Populate the given sections; see [`Author::fill`].
    pub async fn fill_sections<F>(
        &mut self,
        fetcher: &F,
        sections: &[Section],
    ) -> ProfileResult<&mut Self>
    where
        F: DocumentFetcher + ?Sized,
    {
        let request =
            if sections.is_empty() { FillRequest::All } else { FillRequest::Only(sections.to_vec()) };
        self.fill_with(fetcher, request, &SelectorTable::CURRENT).await
    }

    /// Populate sections using an explicit selector table.
    pub async fn fill_with<F>(
        &mut self,
        fetcher: &F,
        request: FillRequest,
        selectors: &SelectorTable,
    ) -> ProfileResult<&mut Self>
    where
        F: DocumentFetcher + ?Sized,
    {
        let (plan, mark) = request.plan();
        tracing::info!(author = %self.id, sections = ?plan, mark, "Filling author profile");

        let page = fetcher.fetch_page(&first_page_path(&self.id)).await?;

        let mut pending = plan.into_iter().peekable();
        while pending.peek().is_some() {
            let paginator = {
                let document = ProfileDocument::parse(&page);
                self.run_sections(&document, selectors, &mut pending, mark)?
            };

            let Some(mut paginator) = paginator else { continue };
            let publications = self.publications.get_or_insert_with(Vec::new);
            paginator.drain(fetcher, selectors, publications).await?;

            tracing::debug!(
                author = %self.id,
                pages = paginator.pages(),
                publications = publications.len(),
                "Publications harvested"
            );
            if mark {
                self.filled.insert(Section::Publications);
            }
        }

        tracing::info!(author = %self.id, filled = self.filled(), "Author profile filled");
        Ok(self)
    }

    /// Run sections from `pending` against one parsed page.
    ///
    /// Stops after harvesting the first publications page and hands back its
    /// paginator; the caller fetches the rest before resuming.
    fn run_sections(
        &mut self,
        document: &ProfileDocument,
        selectors: &SelectorTable,
        pending: &mut impl Iterator<Item = Section>,
        mark: bool,
    ) -> ProfileResult<Option<Paginator>> {
        for section in pending {
            if mark && self.filled.contains(&section) {
                tracing::debug!(author = %self.id, %section, "Section already filled");
                continue;
            }

            tracing::debug!(author = %self.id, %section, "Parsing section");
            match section {
                Section::Basics => parse_basics(document, selectors, self)?,
                Section::Indices => parse_indices(document, selectors, self)?,
                Section::Counts => parse_counts(document, selectors, self)?,
                Section::Coauthors => parse_coauthors(document, selectors, self)?,
                Section::Publications => {
                    let mut paginator = Paginator::new(self.id.clone());
                    paginator.absorb(document, selectors, self.publications.insert(Vec::new()))?;
                    return Ok(Some(paginator));
                }
            }

            if mark {
                self.filled.insert(section);
            }
        }

        Ok(None)
    }
}
