//! Output formatters for Markdown, JSON and plain-text dumps.

mod json;
mod markdown;
mod text;

pub use self::json::*;
pub use markdown::*;
pub use text::format_author_text;
