//! Versioned selector table for profile and search-result markup.
//!
//! Every selector the parsers use lives here, so markup drift on the site is a
//! one-line edit. Search-result fragments use [`ClassMarker`]s instead of fixed
//! classes: their class names rotate, but contain stable substrings.

use scraper::ElementRef;

use super::document::select_all;
use crate::error::ProfileResult;

/// A tag plus a substring expected inside the element's first class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassMarker {
    /// Element tag name.
    pub tag: &'static str,
    /// Substring of the first class.
    pub marker: &'static str,
}

/// CSS selectors for one revision of the site's markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorTable {
    /// Markup revision this table targets.
    pub version: &'static str,

    // Profile page: basics
    pub profile_name: &'static str,
    pub profile_affiliation: &'static str,
    pub profile_interests: &'static str,

    // Profile page: indices and counts
    pub index_cells: &'static str,
    pub year_labels: &'static str,
    pub year_counts: &'static str,

    // Profile page: publications
    pub publication_rows: &'static str,
    pub load_more: &'static str,
    pub publication_title: &'static str,
    pub publication_meta: &'static str,
    pub publication_cited_by: &'static str,
    pub publication_year: &'static str,

    // Profile page: co-authors
    pub coauthor_panels: &'static str,
    pub coauthor_link: &'static str,
    pub coauthor_name: &'static str,
    pub coauthor_affiliation: &'static str,

    // Search results
    pub search_results: &'static str,
    pub search_link: &'static str,
    pub search_name: ClassMarker,
    pub search_affiliation: ClassMarker,
    pub search_email: ClassMarker,
    pub search_interests: ClassMarker,
    pub search_cited_by: ClassMarker,
}

impl SelectorTable {
    /// Markup served by the site as of 2020.
    pub const V2020: Self = Self {
        version: "2020",

        profile_name: "div#gsc_prf_in",
        profile_affiliation: "div.gsc_prf_il",
        profile_interests: "a.gsc_prf_inta",

        index_cells: "td.gsc_rsb_std",
        year_labels: "span.gsc_g_t",
        year_counts: "span.gsc_g_al",

        publication_rows: "tr.gsc_a_tr",
        load_more: "button#gsc_bpf_more",
        publication_title: "a.gsc_a_at",
        publication_meta: "div.gs_gray",
        publication_cited_by: "a.gsc_a_ac",
        publication_year: "span.gsc_a_h",

        coauthor_panels: "div.gsc_rsb_aa",
        coauthor_link: "a",
        coauthor_name: "[tabindex=\"-1\"]",
        coauthor_affiliation: ".gsc_rsb_a_ext",

        search_results: "div.gsc_1usr",
        search_link: "a",
        search_name: ClassMarker { tag: "h3", marker: "name" },
        search_affiliation: ClassMarker { tag: "div", marker: "aff" },
        search_email: ClassMarker { tag: "div", marker: "eml" },
        search_interests: ClassMarker { tag: "a", marker: "one_int" },
        search_cited_by: ClassMarker { tag: "div", marker: "cby" },
    };

    /// Table used by default.
    pub const CURRENT: Self = Self::V2020;
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// First class token of an element, if it has a `class` attribute.
fn first_class<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element.value().attr("class")?.split_whitespace().next()
}

/// Whether `element` carries `class` among its class tokens.
fn has_class(element: &ElementRef<'_>, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

/// Discover the concrete class behind a marker.
///
/// Scans every `marker.tag` element under `root` and returns the first class of
/// the first one whose first class contains `marker.marker`.
pub fn find_marked_class(root: ElementRef<'_>, marker: ClassMarker) -> ProfileResult<Option<String>> {
    let found = select_all(root, marker.tag)?
        .into_iter()
        .filter_map(|el| first_class(&el))
        .find(|class| class.contains(marker.marker))
        .map(str::to_string);

    Ok(found)
}

/// All `marker.tag` elements carrying the class discovered for `marker`.
///
/// Empty when no element matches the marker.
pub fn select_marked<'a>(
    root: ElementRef<'a>,
    marker: ClassMarker,
) -> ProfileResult<Vec<ElementRef<'a>>> {
    let Some(class) = find_marked_class(root, marker)? else {
        return Ok(Vec::new());
    };

    Ok(select_all(root, marker.tag)?.into_iter().filter(|el| has_class(el, &class)).collect())
}

/// First `marker.tag` element carrying the class discovered for `marker`.
pub fn select_marked_first<'a>(
    root: ElementRef<'a>,
    marker: ClassMarker,
) -> ProfileResult<Option<ElementRef<'a>>> {
    Ok(select_marked(root, marker)?.into_iter().next())
}
