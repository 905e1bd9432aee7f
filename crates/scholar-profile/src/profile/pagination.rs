//! Publication list harvesting across result pages.
//!
//! The profile page shows at most [`scholar::PAGE_SIZE`] publications; the
//! "show more" button stays enabled while further pages exist. Pages are
//! fetched strictly one after another, each only after the previous page's
//! button has been inspected.

use crate::client::DocumentFetcher;
use crate::config::{page_path, scholar};
use crate::error::ProfileResult;
use crate::extract::{ProfileDocument, SelectorTable, attr};
use crate::models::{Publication, PublicationSource};

/// Publications found on one page, plus the state of the "show more" button.
#[derive(Debug, Clone)]
pub struct PageHarvest {
    /// Rows of the page, in document order.
    pub publications: Vec<Publication>,
    /// Whether the button is present and not disabled.
    pub has_more: bool,
}

/// Parse one page of the citations table.
///
/// Fails if the "show more" button is missing altogether.
pub fn harvest_page(document: &ProfileDocument, selectors: &SelectorTable) -> ProfileResult<PageHarvest> {
    let publications = document
        .select_all(selectors.publication_rows)?
        .into_iter()
        .map(|row| Publication::from_citation_row(row, PublicationSource::Citations, selectors))
        .collect::<ProfileResult<Vec<_>>>()?;

    let button = document.require(selectors.load_more)?;
    let has_more = attr(&button, "disabled").is_none();

    Ok(PageHarvest { publications, has_more })
}

/// Cursor over an author's publication pages.
#[derive(Debug, Clone)]
pub struct Paginator {
    author_id: String,
    cursor: usize,
    pages: usize,
    done: bool,
}

impl Paginator {
    /// Cursor positioned on the first page.
    #[must_use]
    pub fn new(author_id: impl Into<String>) -> Self {
        Self { author_id: author_id.into(), cursor: 0, pages: 0, done: false }
    }

    /// Offset of the current page.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Pages absorbed so far.
    #[must_use]
    pub const fn pages(&self) -> usize {
        self.pages
    }

    /// Whether the last page has been absorbed.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Append the current page's rows to `out` and record the button state.
    pub fn absorb(
        &mut self,
        document: &ProfileDocument,
        selectors: &SelectorTable,
        out: &mut Vec<Publication>,
    ) -> ProfileResult<()> {
        let harvest = harvest_page(document, selectors)?;
        tracing::debug!(
            author = %self.author_id,
            cstart = self.cursor,
            rows = harvest.publications.len(),
            has_more = harvest.has_more,
            "Harvested publications page"
        );

        out.extend(harvest.publications);
        self.pages += 1;
        self.done = !harvest.has_more;
        Ok(())
    }

    /// Advance the cursor one page and return the path to fetch.
    pub fn advance(&mut self) -> String {
        self.cursor += scholar::PAGE_SIZE;
        page_path(&self.author_id, self.cursor)
    }

    /// Fetch and absorb pages until the button is disabled.
    pub async fn drain<F>(
        &mut self,
        fetcher: &F,
        selectors: &SelectorTable,
        out: &mut Vec<Publication>,
    ) -> ProfileResult<()>
    where
        F: DocumentFetcher + ?Sized,
    {
        while !self.done {
            let path = self.advance();
            let page = fetcher.fetch_page(&path).await?;

            let document = ProfileDocument::parse(&page);
            self.absorb(&document, selectors, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    fn page(rows: &[&str], button: &str) -> ProfileDocument {
        let rows: String = rows
            .iter()
            .map(|t| format!(r#"<tr class="gsc_a_tr"><td><a class="gsc_a_at" href="/x">{t}</a></td></tr>"#))
            .collect();
        ProfileDocument::parse(&format!(
            "<html><body><table><tbody>{rows}</tbody></table>{button}</body></html>"
        ))
    }

    #[test]
    fn test_enabled_button_has_more() {
        let doc = page(&["A", "B"], r#"<button id="gsc_bpf_more">Show more</button>"#);
        let harvest = harvest_page(&doc, &SelectorTable::CURRENT).unwrap();
        assert!(harvest.has_more);
        assert_eq!(harvest.publications.len(), 2);
    }

    #[test]
    fn test_disabled_button_ends() {
        let doc = page(&["A"], r#"<button id="gsc_bpf_more" disabled>Show more</button>"#);
        assert!(!harvest_page(&doc, &SelectorTable::CURRENT).unwrap().has_more);
    }

    #[test]
    fn test_missing_button_is_an_error() {
        let doc = page(&["A"], "");
        let err = harvest_page(&doc, &SelectorTable::CURRENT).unwrap_err();
        assert!(matches!(err, ProfileError::MissingElement { .. }));
    }

    #[test]
    fn test_advance_builds_paged_paths() {
        let mut paginator = Paginator::new("abc");
        assert_eq!(paginator.advance(), "/citations?hl=en&user=abc&cstart=100&pagesize=100");
        assert_eq!(paginator.advance(), "/citations?hl=en&user=abc&cstart=200&pagesize=100");
        assert_eq!(paginator.cursor(), 200);
    }

    #[test]
    fn test_empty_page_with_enabled_button_keeps_going() {
        let mut paginator = Paginator::new("abc");
        let mut out = Vec::new();
        let doc = page(&[], r#"<button id="gsc_bpf_more">Show more</button>"#);
        paginator.absorb(&doc, &SelectorTable::CURRENT, &mut out).unwrap();
        assert!(out.is_empty());
        assert!(!paginator.is_done());
        assert_eq!(paginator.pages(), 1);
    }
}
