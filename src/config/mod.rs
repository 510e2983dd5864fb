pub mod config;

pub use self::config::{
    load_config, load_config_from, load_config_with_prefix, AppConfig, DisplayConfig, StoreConfig,
};
