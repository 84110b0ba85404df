use serde::{Deserialize, Serialize};

use super::defaults;

/// Survival adjuster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurvivalConfig {
    /// Lowest adjusted percentage ever returned.
    pub floor_percent: u32,
}

impl Default for SurvivalConfig {
    fn default() -> Self {
        Self {
            floor_percent: defaults::DEFAULT_SURVIVAL_FLOOR_PERCENT,
        }
    }
}
