//! Parsed page wrapper and element lookup helpers.

use scraper::{ElementRef, Html, Selector};

use crate::error::{ProfileError, ProfileResult};

/// One fetched page, parsed.
pub struct ProfileDocument {
    html: Html,
}

impl ProfileDocument {
    /// Parse a full HTML page.
    #[must_use]
    pub fn parse(page: &str) -> Self {
        Self { html: Html::parse_document(page) }
    }

    /// Parse an HTML fragment (a single search-result entry, say).
    #[must_use]
    pub fn parse_fragment(fragment: &str) -> Self {
        Self { html: Html::parse_fragment(fragment) }
    }

    /// Root element to run lookups from.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// First element matching `css`.
    pub fn select_first(&self, css: &str) -> ProfileResult<Option<ElementRef<'_>>> {
        select_first(self.root(), css)
    }

    /// Every element matching `css`, in document order.
    pub fn select_all(&self, css: &str) -> ProfileResult<Vec<ElementRef<'_>>> {
        select_all(self.root(), css)
    }

    /// First element matching `css`, or a missing-element error.
    pub fn require(&self, css: &str) -> ProfileResult<ElementRef<'_>> {
        self.select_first(css)?.ok_or_else(|| ProfileError::missing(css))
    }
}

impl std::fmt::Debug for ProfileDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileDocument").finish()
    }
}

/// Parse a CSS selector, mapping failures to [`ProfileError::InvalidSelector`].
pub fn selector(css: &str) -> ProfileResult<Selector> {
    Selector::parse(css).map_err(|e| ProfileError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// First descendant of `root` matching `css`.
pub fn select_first<'a>(root: ElementRef<'a>, css: &str) -> ProfileResult<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(root.select(&sel).next())
}

/// Every descendant of `root` matching `css`, in document order.
pub fn select_all<'a>(root: ElementRef<'a>, css: &str) -> ProfileResult<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(root.select(&sel).collect())
}

/// Trimmed text content of an element.
#[must_use]
pub fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of the first descendant matching `css`, if any.
pub fn text_in(root: ElementRef<'_>, css: &str) -> ProfileResult<Option<String>> {
    Ok(select_first(root, css)?.map(|el| text_of(&el)))
}

/// Attribute value of an element.
#[must_use]
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}
