use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::ApiConfig;
use crate::models::TierDefinition;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub cache: CacheSettings,
    pub tiers: Vec<TierDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheSettings {
    pub summary_ttl_seconds: u64,
    pub rating_ttl_seconds: u64,
    pub tier_ttl_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Rally Scorer".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            api: ApiConfig::default(),
            cache: CacheSettings {
                summary_ttl_seconds: 120,
                rating_ttl_seconds: 120,
                tier_ttl_seconds: 3600,
            },
            tiers: default_tier_table(),
        }
    }
}

/// Built-in tier table, used when the tier-list endpoint is unavailable and
/// no override is configured. Half-open brackets, ascending.
pub fn default_tier_table() -> Vec<TierDefinition> {
    let brackets = [
        ("Bronze", 0.0, 1000.0, "#cd7f32"),
        ("Silver", 1000.0, 2000.0, "#c0c0c0"),
        ("Gold", 2000.0, 3000.0, "#ffd700"),
        ("Platinum", 3000.0, 4000.0, "#7de0e6"),
        ("Diamond", 4000.0, 10000.0, "#b9f2ff"),
    ];

    brackets
        .into_iter()
        .map(|(name, min, max, color)| TierDefinition {
            name: name.to_string(),
            min_rating: min,
            max_rating: max,
            color: color.to_string(),
        })
        .collect()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RALLY_SCORE"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        crate::models::TierSet::new(self.tiers.clone())
            .map_err(|e| format!("configured tier table is invalid: {}", e))?;

        if self.api.timeout_seconds == 0 {
            return Err("api.timeout_seconds must be greater than zero".to_string());
        }

        if self.api.base_url.is_empty() {
            return Err("api.base_url must not be empty".to_string());
        }

        Ok(())
    }
}
