pub mod fetch_page;
pub mod storefront_url;

pub use fetch_page::{build_client, fetch_page};
pub use storefront_url::storefront_url;
