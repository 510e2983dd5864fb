use scraper::ElementRef;

use crate::scraping::selectors::LINK_ATTR;

/// Reads the link attribute carried by the row anchor itself.
pub fn extract_link(row: &ElementRef) -> Option<String> {
    row.value().attr(LINK_ATTR).map(|href| href.trim().to_string())
}
