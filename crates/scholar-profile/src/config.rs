//! Configuration for the profile fetcher.

use std::time::Duration;

/// Site constants.
pub mod scholar {
    use std::time::Duration;

    /// Public host of the profile site.
    pub const HOST: &str = "https://scholar.google.com";

    /// Profile citations endpoint; `{id}` is the author identifier.
    pub const CITATIONS_PATH: &str = "/citations?hl=en&user={id}";

    /// Medium-size profile photo endpoint.
    pub const PHOTO_PATH: &str = "/citations?view_op=medium_photo&user={id}";

    /// Publications fetched per page.
    pub const PAGE_SIZE: usize = 100;

    /// Prefix of the email line on search results.
    pub const EMAIL_PREFIX: &str = "Verified email at ";

    /// Length of the "Cited by " label in front of the search-result count.
    pub const CITED_BY_LABEL_LEN: usize = 9;

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Delay between requests (1 req/s keeps the site from serving captchas).
    pub const RATE_LIMIT_DELAY: Duration = Duration::from_secs(1);

    /// Retries for transient failures.
    pub const MAX_RETRIES: u32 = 3;

    /// Browser-like user agent; the site rejects obvious bots.
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
}

/// Relative path of an author's citations page.
#[must_use]
pub fn citations_path(author_id: &str) -> String {
    scholar::CITATIONS_PATH.replace("{id}", author_id)
}

/// Relative path of the first profile page, publications sized to one page.
#[must_use]
pub fn first_page_path(author_id: &str) -> String {
    format!("{}&pagesize={}", citations_path(author_id), scholar::PAGE_SIZE)
}

/// Relative path of the publications page starting at `cstart`.
#[must_use]
pub fn page_path(author_id: &str, cstart: usize) -> String {
    format!("{}&cstart={}&pagesize={}", citations_path(author_id), cstart, scholar::PAGE_SIZE)
}

/// Absolute photo URL for an author. Always points at the public host.
#[must_use]
pub fn photo_url(author_id: &str) -> String {
    format!("{}{}", scholar::HOST, scholar::PHOTO_PATH.replace("{id}", author_id))
}

/// Compose `path` with `host` unless it is already absolute.
#[must_use]
pub fn absolute_url(host: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", host.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", host.trim_end_matches('/'), path)
    }
}

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host prefix for relative page paths.
    pub host: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Delay before every request.
    pub rate_limit_delay: Duration,

    /// Maximum retries for transient failures.
    pub max_retries: u32,

    /// User-Agent header value.
    pub user_agent: String,
}

impl Config {
    /// Create the default configuration for the public site.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: scholar::HOST.to_string(),
            request_timeout: scholar::REQUEST_TIMEOUT,
            connect_timeout: scholar::CONNECT_TIMEOUT,
            rate_limit_delay: scholar::RATE_LIMIT_DELAY,
            max_retries: scholar::MAX_RETRIES,
            user_agent: scholar::USER_AGENT.to_string(),
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            host: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            rate_limit_delay: Duration::from_millis(0), // No delay in tests
            max_retries: 0,
            user_agent: "scholar-profile-tests".to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `SCHOLAR_HOST`, `SCHOLAR_RATE_LIMIT_MS` and `SCHOLAR_USER_AGENT`.
    ///
    /// # Errors
    ///
    /// Returns error if `SCHOLAR_HOST` is not a URL or the delay is not a number.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Ok(host) = std::env::var("SCHOLAR_HOST") {
            config = config.with_host(&host)?;
        }

        if let Ok(ms) = std::env::var("SCHOLAR_RATE_LIMIT_MS") {
            let ms: u64 = ms
                .parse()
                .map_err(|e| anyhow::anyhow!("SCHOLAR_RATE_LIMIT_MS={ms:?}: {e}"))?;
            config.rate_limit_delay = Duration::from_millis(ms);
        }

        if let Ok(agent) = std::env::var("SCHOLAR_USER_AGENT") {
            config.user_agent = agent;
        }

        Ok(config)
    }

    /// Replace the host after checking it is an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns error if `host` does not parse as a URL.
    pub fn with_host(mut self, host: &str) -> anyhow::Result<Self> {
        let parsed = url::Url::parse(host)?;
        self.host = parsed.as_str().trim_end_matches('/').to_string();
        Ok(self)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.host, scholar::HOST);
        assert_eq!(config.max_retries, scholar::MAX_RETRIES);
    }

    #[test]
    fn test_config_with_host_strips_trailing_slash() {
        let config = Config::new().with_host("http://127.0.0.1:8080/").unwrap();
        assert_eq!(config.host, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_config_with_host_rejects_garbage() {
        assert!(Config::new().with_host("not a url").is_err());
    }

    #[test]
    fn test_paths() {
        assert_eq!(citations_path("abc"), "/citations?hl=en&user=abc");
        assert_eq!(first_page_path("abc"), "/citations?hl=en&user=abc&pagesize=100");
        assert_eq!(page_path("abc", 200), "/citations?hl=en&user=abc&cstart=200&pagesize=100");
    }

    #[test]
    fn test_photo_url() {
        assert_eq!(
            photo_url("4bahYMkAAAAJ"),
            "https://scholar.google.com/citations?view_op=medium_photo&user=4bahYMkAAAAJ"
        );
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("http://h", "/citations"), "http://h/citations");
        assert_eq!(absolute_url("http://h/", "citations"), "http://h/citations");
        assert_eq!(absolute_url("http://h", "https://x/y"), "https://x/y");
    }
}
