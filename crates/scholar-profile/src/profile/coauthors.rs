//! Co-author panel parsing.

use scraper::ElementRef;

use crate::error::{ProfileError, ProfileResult};
use crate::extract::{ProfileDocument, SelectorTable, attr, select_first, text_in};
use crate::models::{Author, user_id_from_link};

/// Replace the co-author list with one stub per panel.
///
/// Stubs carry identifier, name and affiliation only; they are not fetched.
pub fn parse_coauthors(
    document: &ProfileDocument,
    selectors: &SelectorTable,
    author: &mut Author,
) -> ProfileResult<()> {
    let coauthors = author.coauthors.insert(Vec::new());

    for panel in document.select_all(selectors.coauthor_panels)? {
        coauthors.push(coauthor_from_panel(panel, selectors)?);
    }

    Ok(())
}

fn coauthor_from_panel(panel: ElementRef<'_>, selectors: &SelectorTable) -> ProfileResult<Author> {
    let link = select_first(panel, selectors.coauthor_link)?
        .ok_or_else(|| ProfileError::identity(""))?;
    let id = user_id_from_link(attr(&link, "href").unwrap_or_default())?;

    let mut stub = Author::new(id);
    stub.name = Some(
        text_in(panel, selectors.coauthor_name)?
            .ok_or_else(|| ProfileError::missing(selectors.coauthor_name))?,
    );
    stub.affiliation = Some(
        text_in(panel, selectors.coauthor_affiliation)?
            .ok_or_else(|| ProfileError::missing(selectors.coauthor_affiliation))?,
    );

    Ok(stub)
}
