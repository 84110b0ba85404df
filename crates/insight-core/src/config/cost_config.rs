use serde::{Deserialize, Serialize};

use super::defaults;

/// Cost estimator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Base cost used for unrecognised (treatment, care tier) pairs.
    pub fallback_base_cost: u64,
    /// Share of the income-band subsidy rate applied to the post-insurance balance.
    pub subsidy_share: f64,
    /// Symbol prefixed to formatted currency amounts.
    pub currency_symbol: String,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            fallback_base_cost: defaults::DEFAULT_FALLBACK_BASE_COST,
            subsidy_share: defaults::DEFAULT_SUBSIDY_SHARE,
            currency_symbol: defaults::DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}
