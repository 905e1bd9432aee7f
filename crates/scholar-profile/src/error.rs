//! Error types for profile fetching and parsing.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use std::time::Duration;

/// Errors from the page-fetch layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Middleware error (retry exhaustion included)
    #[error("Middleware error: {0}")]
    Middleware(#[from] reqwest_middleware::Error),

    /// Rate limited by the profile site (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Page not found (404 response)
    #[error("Page not found: {resource}")]
    NotFound {
        /// URL or description of the missing page
        resource: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited { retry_after: Duration::from_secs(seconds) }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound { resource: resource.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}

/// Errors raised while building or filling an author profile.
#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    /// A link that should carry an author identifier did not.
    #[error("No author identifier in link: {link:?}")]
    IdentityParse {
        /// The offending href (empty when no link was found at all)
        link: String,
    },

    /// A required element is absent from the page.
    #[error("Missing element: {element}")]
    MissingElement {
        /// Selector or description of the element
        element: String,
    },

    /// A numeric cell could not be parsed.
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber {
        /// Field being parsed
        field: &'static str,
        /// Raw text of the cell
        value: String,
    },

    /// A selector from the selector table does not parse.
    #[error("Invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        /// The CSS selector text
        selector: String,
        /// Parser message
        reason: String,
    },

    /// Section name not recognised.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Page fetch failed.
    #[error("Fetch error: {0}")]
    Fetch(#[from] ClientError),
}

impl ProfileError {
    /// Create an identity parse error.
    #[must_use]
    pub fn identity(link: impl Into<String>) -> Self {
        Self::IdentityParse { link: link.into() }
    }

    /// Create a missing element error.
    #[must_use]
    pub fn missing(element: impl Into<String>) -> Self {
        Self::MissingElement { element: element.into() }
    }

    /// Create an invalid number error.
    #[must_use]
    pub fn invalid_number(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber { field, value: value.into() }
    }

    /// Returns true if the failure came from the fetch layer.
    #[must_use]
    pub const fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

/// Result type alias for fetch operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
