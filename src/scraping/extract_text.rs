use scraper::{ElementRef, Selector};

use crate::utilities::normalize_text::normalize_text;

/// Returns the normalized text of the first element under `row` matching
/// `selector`, or `None` when there is no such element.
pub fn extract_text(row: &ElementRef, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|element| normalize_text(&element.text().collect::<String>()))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::scraping::selectors::{parse_selector, TITLE};

    #[test]
    fn reads_nested_title_text() {
        let document = Html::parse_fragment(
            r#"<a><div><span class="title"> Baldur&#39;s <b>Gate</b> 3 </span></div></a>"#,
        );
        let anchor = parse_selector("a").unwrap();
        let row = document.select(&anchor).next().unwrap();

        let title = extract_text(&row, &parse_selector(TITLE).unwrap());

        assert_eq!(title.as_deref(), Some("Baldur's Gate 3"));
    }

    #[test]
    fn absent_element_is_none() {
        let document = Html::parse_fragment(r#"<a><span class="other">x</span></a>"#);
        let anchor = parse_selector("a").unwrap();
        let row = document.select(&anchor).next().unwrap();

        assert_eq!(extract_text(&row, &parse_selector(TITLE).unwrap()), None);
    }
}
