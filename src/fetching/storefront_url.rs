use urlencoding::encode;

use crate::config::StoreConfig;

/// Builds the search URL, e.g. `https://store.steampowered.com/search/?filter=topsellers&cc=ru`.
pub fn storefront_url(store: &StoreConfig) -> String {
    let separator = if store.base_url.contains('?') { '&' } else { '?' };

    format!(
        "{}{}filter={}&cc={}",
        store.base_url,
        separator,
        encode(&store.filter),
        encode(&store.country_code)
    )
}
