//! Data models for author profiles.
//!
//! Optional attributes are `Option`s: `None` means the page never showed the
//! field, which is distinct from an empty value.

mod author;
mod cites;
mod publication;
mod section;

pub(crate) use author::user_id_from_link;
pub use author::{Author, parse_search_page};
pub use cites::CitesPerYear;
pub use publication::{Publication, PublicationSource};
pub use section::Section;
