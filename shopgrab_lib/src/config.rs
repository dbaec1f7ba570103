//! Pipeline configuration.

use std::time::Duration;

/// Configuration for one harvesting run.
///
/// Built by the entry point and passed explicitly into the pipeline; the
/// library reads no ambient state.
#[derive(Clone, Debug)]
pub struct ScrapeConfig {
    /// Free-text search keyword.
    pub query: String,
    /// Number of result pages to visit, starting from page 1.
    pub pages: u32,
    /// Base URL of the search-results site.
    pub base_url: String,
    /// How long to wait for the listing container on each page before the
    /// page is skipped.
    pub listing_ready_timeout: Duration,
}

impl ScrapeConfig {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            pages: 2,
            base_url: "https://www.amazon.com".to_string(),
            listing_ready_timeout: Duration::from_secs(15),
        }
    }
}
