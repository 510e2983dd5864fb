use reqwest::Url;

use crate::error::ScrapeError;

/// Resolves a row `href` against the page it was found on.
pub fn resolve_url(base_url: &str, href: &str) -> Result<String, ScrapeError> {
    let base = Url::parse(base_url)
        .map_err(|e| ScrapeError::parse(format!("invalid base url {}: {}", base_url, e)))?;

    base.join(href)
        .map(String::from)
        .map_err(|e| ScrapeError::parse(format!("invalid url {}: {}", href, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://store.steampowered.com/search/?filter=topsellers&cc=ru";

    #[test]
    fn absolute_href_is_kept() {
        let url = resolve_url(BASE, "https://store.steampowered.com/app/730/CounterStrike_2/").unwrap();
        assert_eq!(url, "https://store.steampowered.com/app/730/CounterStrike_2/");
    }

    #[test]
    fn relative_href_is_joined_to_the_host() {
        let url = resolve_url(BASE, "/app/570/Dota_2/").unwrap();
        assert_eq!(url, "https://store.steampowered.com/app/570/Dota_2/");
    }

    #[test]
    fn unparsable_base_is_a_parse_error() {
        let err = resolve_url("not a url", "/app/1/").unwrap_err();
        assert!(matches!(err, ScrapeError::Parse(_)));
    }
}
