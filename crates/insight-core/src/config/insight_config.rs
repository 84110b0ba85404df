//! Top-level configuration with 3-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CostConfig, ObservabilityConfig, SurvivalConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file looked up by [`InsightConfig::load`].
pub const PROJECT_CONFIG_FILE: &str = "insight.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`INSIGHT_*`)
/// 2. Project config (`insight.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InsightConfig {
    pub cost: CostConfig,
    pub survival: SurvivalConfig,
    pub observability: ObservabilityConfig,
}

impl InsightConfig {
    /// Load configuration with 3-layer resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (sections and keys may be omitted).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &InsightConfig) -> Result<(), ConfigError> {
        if config.cost.fallback_base_cost == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "cost.fallback_base_cost".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&config.cost.subsidy_share) {
            return Err(ConfigError::ValidationFailed {
                field: "cost.subsidy_share".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if config.survival.floor_percent > 100 {
            return Err(ConfigError::ValidationFailed {
                field: "survival.floor_percent".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        Ok(())
    }

    /// Apply `INSIGHT_*` environment variables. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut InsightConfig) {
        if let Some(v) = env_parse::<u64>("INSIGHT_COST_FALLBACK_BASE_COST") {
            config.cost.fallback_base_cost = v;
        }
        if let Some(v) = env_parse::<f64>("INSIGHT_COST_SUBSIDY_SHARE") {
            config.cost.subsidy_share = v;
        }
        if let Ok(v) = std::env::var("INSIGHT_COST_CURRENCY_SYMBOL") {
            config.cost.currency_symbol = v;
        }
        if let Some(v) = env_parse::<u32>("INSIGHT_SURVIVAL_FLOOR_PERCENT") {
            config.survival.floor_percent = v;
        }
        if let Ok(v) = std::env::var("INSIGHT_LOG_LEVEL") {
            config.observability.log_level = v;
        }
        if let Some(v) = env_parse::<bool>("INSIGHT_LOG_JSON") {
            config.observability.json = v;
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
