pub mod config;
pub mod error;
pub mod fetching;
pub mod load_top_sellers;
pub mod presenter;
pub mod scraping;
pub mod utilities;

pub use error::ScrapeError;
pub use load_top_sellers::load_top_sellers;
pub use scraping::ranked_item::{RankedItem, TopSellers};
