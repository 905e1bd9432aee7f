//! Field extraction over parsed pages.

pub mod document;
pub mod selectors;

pub use document::{ProfileDocument, attr, select_all, select_first, selector, text_in, text_of};
pub use selectors::{ClassMarker, SelectorTable, find_marked_class, select_marked, select_marked_first};
