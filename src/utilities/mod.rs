pub mod logger;
pub mod normalize_text;
pub mod resolve_url;
