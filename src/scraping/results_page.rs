use scraper::Html;

use crate::error::ScrapeError;
use crate::scraping::extract_link::extract_link;
use crate::scraping::extract_text::extract_text;
use crate::scraping::selectors::{parse_selector, FREE_PRICE, PRICE, ROW, TITLE};

/// Raw fields of one result row, as found in the markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub title: Option<String>,
    pub price: Option<String>,
    pub free_price: Option<String>,
    pub href: Option<String>,
}

/// A parsed results page: selects the first `limit` rows with their fields.
pub trait ResultsPage {
    fn rows(&self, limit: usize) -> Result<Vec<RawRow>, ScrapeError>;
}

pub struct HtmlResultsPage {
    document: Html,
}

impl HtmlResultsPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }
}

impl ResultsPage for HtmlResultsPage {
    fn rows(&self, limit: usize) -> Result<Vec<RawRow>, ScrapeError> {
        let row_selector = parse_selector(ROW)?;
        let title_selector = parse_selector(TITLE)?;
        let price_selector = parse_selector(PRICE)?;
        let free_selector = parse_selector(FREE_PRICE)?;

        let rows = self
            .document
            .select(&row_selector)
            .take(limit)
            .map(|row| RawRow {
                title: extract_text(&row, &title_selector),
                price: extract_text(&row, &price_selector),
                free_price: extract_text(&row, &free_selector),
                href: extract_link(&row),
            })
            .collect();

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div id="search_resultsRows">
            <a href="https://store.steampowered.com/app/730/">
              <span class="title">Counter-Strike 2</span>
              <div class="discount_final_price free">Free</div>
            </a>
            <a href="https://store.steampowered.com/app/1086940/">
              <span class="title">Baldur's Gate 3</span>
              <div class="discount_final_price">1 999 руб.</div>
            </a>
            <a href="https://store.steampowered.com/app/570/">
              <span class="title">Dota 2</span>
            </a>
          </div>
          <a href="/elsewhere"><span class="title">Not a row</span></a>
        </body></html>
    "#;

    #[test]
    fn reads_fields_of_each_row() {
        let rows = HtmlResultsPage::parse(PAGE).rows(10).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            RawRow {
                title: Some("Counter-Strike 2".to_string()),
                price: None,
                free_price: Some("Free".to_string()),
                href: Some("https://store.steampowered.com/app/730/".to_string()),
            }
        );
        assert_eq!(rows[1].price.as_deref(), Some("1 999 руб."));
        assert_eq!(rows[1].free_price, None);
        assert_eq!(rows[2].price, None);
        assert_eq!(rows[2].free_price, None);
    }

    #[test]
    fn limit_takes_the_first_rows() {
        let rows = HtmlResultsPage::parse(PAGE).rows(2).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].title.as_deref(), Some("Baldur's Gate 3"));
    }

    #[test]
    fn page_without_container_has_no_rows() {
        let rows = HtmlResultsPage::parse("<html><body><a href='/x'>x</a></body></html>")
            .rows(10)
            .unwrap();

        assert!(rows.is_empty());
    }
}
