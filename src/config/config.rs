use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub base_url: String,
    pub filter: String,
    pub country_code: String,
    pub region_label: String,
    pub item_count: usize,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://store.steampowered.com/search/".to_string(),
            filter: "topsellers".to_string(),
            country_code: "ru".to_string(),
            region_label: "RU".to_string(),
            item_count: 10,
            timeout_secs: 30,
            user_agent: concat!("top_sellers/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub rank_width: usize,
    pub name_width: usize,
    pub price_width: usize,
    pub free_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            rank_width: 2,
            name_width: 35,
            price_width: 12,
            free_label: "Бесплатно".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.store.item_count == 0 {
            bail!("store.item_count must be at least 1");
        }
        if self.store.timeout_secs == 0 {
            bail!("store.timeout_secs must be at least 1");
        }
        if self.store.base_url.trim().is_empty() {
            bail!("store.base_url must not be empty");
        }
        Ok(())
    }
}

/// Loads `Settings.toml` from the working directory when present, then
/// `APP__SECTION__KEY` environment overrides.
pub fn load_config() -> Result<AppConfig> {
    load_config_from("Settings")
}

pub fn load_config_from(path: &str) -> Result<AppConfig> {
    load_config_with_prefix(path, "APP")
}

/// Same as [`load_config_from`], reading `<PREFIX>__SECTION__KEY` overrides.
pub fn load_config_with_prefix(path: &str, env_prefix: &str) -> Result<AppConfig> {
    let settings = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix(env_prefix).separator("__"))
        .build()
        .context("Failed to read settings")?;

    let config: AppConfig = settings
        .try_deserialize()
        .context("Failed to parse settings")?;
    config.validate()?;

    Ok(config)
}
