use crate::error::ScrapeError;

/// Picks the displayed price of a row.
///
/// A non-blank regular price wins; otherwise a free variant cell maps to
/// `free_label`. A row with neither is rejected.
pub fn extract_price(
    rank: usize,
    price: Option<&str>,
    free_price: Option<&str>,
    free_label: &str,
) -> Result<String, ScrapeError> {
    match (price.filter(|p| !p.trim().is_empty()), free_price) {
        (Some(price), _) => Ok(price.trim().to_string()),
        (None, Some(_)) => Ok(free_label.to_string()),
        (None, None) => Err(ScrapeError::parse(format!(
            "value of field 'price' is missing (row {})",
            rank
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_price_is_kept() {
        let price = extract_price(1, Some("1 099 руб."), None, "Бесплатно").unwrap();
        assert_eq!(price, "1 099 руб.");
    }

    #[test]
    fn free_variant_becomes_free_label() {
        let price = extract_price(2, None, Some("Free To Play"), "Бесплатно").unwrap();
        assert_eq!(price, "Бесплатно");
    }

    #[test]
    fn blank_price_falls_back_to_free_variant() {
        let price = extract_price(2, Some("  "), Some(""), "Free").unwrap();
        assert_eq!(price, "Free");
    }

    #[test]
    fn missing_both_names_the_field() {
        let err = extract_price(4, None, None, "Free").unwrap_err();
        assert_eq!(err.to_string(), "value of field 'price' is missing (row 4)");
    }
}
