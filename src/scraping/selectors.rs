use scraper::Selector;

use crate::error::ScrapeError;

/// Anchors inside the search results container, one per listed item.
pub const ROW: &str = "#search_resultsRows > a";
pub const TITLE: &str = "span.title";
pub const PRICE: &str = "div.discount_final_price:not(.free)";
/// Price cell of items without a numeric price.
pub const FREE_PRICE: &str = "div.discount_final_price.free";
pub const LINK_ATTR: &str = "href";

pub fn parse_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::parse(format!("invalid selector {}: {}", css, e)))
}
