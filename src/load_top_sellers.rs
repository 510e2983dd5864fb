use tracing::info;

use crate::config::AppConfig;
use crate::error::ScrapeError;
use crate::fetching::{build_client, fetch_page, storefront_url};
use crate::scraping::{extract_top_sellers, HtmlResultsPage, TopSellers};

/// Fetches the storefront page and extracts the configured number of items.
///
/// The HTTP client lives only for the duration of the request.
pub async fn load_top_sellers(config: &AppConfig) -> Result<TopSellers, ScrapeError> {
    let url = storefront_url(&config.store);

    let body = {
        let client = build_client(&config.store)?;
        fetch_page(&client, &url).await?
    };
    info!(bytes = body.len(), "parsing storefront page");

    let page = HtmlResultsPage::parse(&body);
    extract_top_sellers(
        &page,
        config.store.item_count,
        &url,
        &config.display.free_label,
    )
}
