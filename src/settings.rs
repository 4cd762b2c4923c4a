use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::env;

use crate::pool_data_service::SubgraphConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Subgraph {
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub max_pools_fetched: Option<u32>,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_chain_id() -> u64 {
    1 // Ethereum mainnet
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for Subgraph {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            url: None,
            max_pools_fetched: None,
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Subgraph {
    pub fn to_config(&self) -> SubgraphConfig {
        SubgraphConfig {
            chain_id: self.chain_id,
            subgraph_url: self.url.clone(),
            max_pools_fetched: self.max_pools_fetched,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub subgraph: Subgraph,
}

impl Settings {
    /// Loads `Config.toml` (optional) and applies `SDK_SUBGRAPH_*` overrides.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file("Config.toml")
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        // Environment variable overrides
        if let Some(chain_id) = env_parse::<u64>("SDK_SUBGRAPH_CHAIN_ID") {
            settings.subgraph.chain_id = chain_id;
        }
        if let Ok(url) = env::var("SDK_SUBGRAPH_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                settings.subgraph.url = Some(trimmed.to_string());
            }
        }
        if let Some(max) = env_parse::<u32>("SDK_SUBGRAPH_MAX_POOLS_FETCHED") {
            settings.subgraph.max_pools_fetched = Some(max);
        }
        if let Some(timeout) = env_parse::<u64>("SDK_SUBGRAPH_TIMEOUT_MS") {
            settings.subgraph.request_timeout_ms = timeout;
        }

        Ok(settings)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            eprintln!("Ignoring {}: cannot parse {:?}", key, raw);
            None
        }
    }
}
