use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::ScrapeError;

/// Builds the HTTP client used for the single storefront request.
pub fn build_client(store: &StoreConfig) -> Result<Client, ScrapeError> {
    Client::builder()
        .timeout(Duration::from_secs(store.timeout_secs))
        .user_agent(store.user_agent.as_str())
        .build()
        .map_err(ScrapeError::from)
}

/// Fetches `url` and returns the body as text.
///
/// # Errors
///
/// - `ScrapeError::Network` when the server answers with a non-2xx status or
///   the connection fails.
/// - `ScrapeError::Timeout` when the request exceeds the client timeout.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    info!(%url, "fetching storefront page");

    let response = client.get(url).send().await?;
    let status = response.status();
    debug!(status = status.as_u16(), "storefront responded");

    if !status.is_success() {
        return Err(ScrapeError::Network {
            status: Some(status.as_u16()),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        });
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "storefront body read");

    Ok(body)
}
