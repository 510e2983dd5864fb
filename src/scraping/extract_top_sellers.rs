use tracing::{debug, info};

use crate::error::ScrapeError;
use crate::scraping::extract_price::extract_price;
use crate::scraping::ranked_item::{missing_field, RankedItem, TopSellers};
use crate::scraping::results_page::{RawRow, ResultsPage};
use crate::utilities::resolve_url::resolve_url;

/// Builds the ranked list from the first `requested` rows of `page`.
///
/// Fails fast: the first row lacking a name, price or link aborts the whole
/// extraction. Relative links are resolved against `base_url`.
///
/// # Errors
///
/// `ScrapeError::Parse` when the page has no result rows or a selected row
/// misses a required field.
pub fn extract_top_sellers<P: ResultsPage + ?Sized>(
    page: &P,
    requested: usize,
    base_url: &str,
    free_label: &str,
) -> Result<TopSellers, ScrapeError> {
    let rows = page.rows(requested)?;
    if rows.is_empty() {
        return Err(ScrapeError::parse("leaderboard table not found"));
    }
    debug!(rows = rows.len(), requested, "result rows selected");

    let items = rows
        .into_iter()
        .take(requested)
        .enumerate()
        .map(|(index, row)| build_item(index + 1, row, base_url, free_label))
        .collect::<Result<Vec<_>, _>>()?;

    let list = TopSellers::new(items, requested);
    info!(effective = list.effective_count(), requested, "top sellers extracted");

    Ok(list)
}

fn build_item(
    rank: usize,
    row: RawRow,
    base_url: &str,
    free_label: &str,
) -> Result<RankedItem, ScrapeError> {
    let name = row
        .title
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| missing_field("name", rank))?;

    let href = row
        .href
        .filter(|href| !href.trim().is_empty())
        .ok_or_else(|| missing_field("url", rank))?;

    let price = extract_price(rank, row.price.as_deref(), row.free_price.as_deref(), free_label)?;
    let url = resolve_url(base_url, &href)?;

    RankedItem::new(rank, name, price, url)
}
