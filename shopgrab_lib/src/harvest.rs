//! Page Harvester: drives the browser session across result pages.

use shopgrab_browser::BrowserSession;

use crate::assets::AssetStore;
use crate::config::ScrapeConfig;
use crate::extract;
use crate::record::ProductRecord;

/// Any rendered result item; presence signals the page is ready to read.
const LISTING_CONTAINER: &str = "div.s-result-item";
/// Actual product entries within the result list.
const SEARCH_RESULT_MARKER: &str = r#"div.s-result-item[data-component-type="s-search-result"]"#;

/// Visits `config.pages` result pages in order and extracts every listing.
///
/// Failures are contained below run level: a page that fails to load or
/// become ready contributes zero records and is not retried, and a node
/// whose extraction hits an infrastructure fault is skipped on its own.
/// Records keep strict page-then-position order; no deduplication is
/// performed even if the same product appears on multiple pages.
pub async fn harvest<S: BrowserSession>(
    session: &S,
    assets: &AssetStore,
    config: &ScrapeConfig,
) -> Vec<ProductRecord> {
    let mut records = Vec::new();

    for page in 1..=config.pages {
        let url = page_url(&config.base_url, &config.query, page);
        tracing::info!("scraping page {}: {}", page, url);

        if let Err(e) = session.navigate(&url).await {
            tracing::warn!("failed to load page {}: {}", page, e);
            continue;
        }
        if let Err(e) = session
            .wait_for(LISTING_CONTAINER, config.listing_ready_timeout)
            .await
        {
            tracing::warn!("page {} never became ready: {}", page, e);
            continue;
        }

        let nodes = match session.find_all(SEARCH_RESULT_MARKER).await {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!("failed to enumerate listings on page {}: {}", page, e);
                continue;
            }
        };

        for node in &nodes {
            match extract::extract(node, assets, records.len()).await {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("skipping listing on page {}: {}", page, e),
            }
        }
    }

    records
}

/// Deterministic navigation target for one result page (1-based).
fn page_url(base_url: &str, query: &str, page: u32) -> String {
    format!(
        "{}/s?k={}&page={}",
        base_url.trim_end_matches('/'),
        query.replace(' ', "+"),
        page
    )
}
