pub mod extract_link;
pub mod extract_price;
pub mod extract_text;
pub mod extract_top_sellers;
pub mod ranked_item;
pub mod results_page;
pub mod selectors;

pub use extract_top_sellers::extract_top_sellers;
pub use ranked_item::{RankedItem, TopSellers};
pub use results_page::{HtmlResultsPage, RawRow, ResultsPage};
