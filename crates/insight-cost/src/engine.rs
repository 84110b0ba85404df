use insight_core::config::CostConfig;
use insight_core::format;
use insight_core::models::{CostBreakdown, CostExplanation, CostInputs};
use insight_core::traits::ICostEstimator;

use crate::formula::{self, FormulaParams};

/// Cost estimator engine. Holds only configuration; every call is pure.
#[derive(Debug, Clone)]
pub struct CostEstimator {
    params: FormulaParams,
    currency_symbol: String,
}

impl CostEstimator {
    /// Create an estimator with the published calculator's constants.
    pub fn new() -> Self {
        Self::from_config(&CostConfig::default())
    }

    /// Create an estimator from the `[cost]` config section.
    pub fn from_config(config: &CostConfig) -> Self {
        Self {
            params: FormulaParams {
                fallback_base_cost: config.fallback_base_cost,
                subsidy_share: config.subsidy_share,
            },
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    pub fn params(&self) -> &FormulaParams {
        &self.params
    }

    /// Estimate with a full explanation of each intermediate value.
    pub fn explain(&self, inputs: &CostInputs) -> CostExplanation {
        let explanation = formula::explain(inputs, &self.params);
        if explanation.used_fallback_cost {
            tracing::debug!(
                treatment = ?inputs.treatment,
                care_tier = ?inputs.care_tier,
                fallback = explanation.base_cost,
                "no table entry for selection, using fallback base cost"
            );
        }
        if inputs.stage.is_none() {
            tracing::debug!("unrecognised stage, using default multiplier");
        }
        explanation
    }

    /// Explain an estimate from raw form values.
    pub fn explain_codes(
        &self,
        stage: &str,
        care_tier: &str,
        treatment: &str,
        income_band: &str,
    ) -> CostExplanation {
        self.explain(&CostInputs::from_codes(
            stage,
            care_tier,
            treatment,
            income_band,
        ))
    }

    /// Format an amount with the configured currency symbol.
    pub fn format_amount(&self, amount: u64) -> String {
        let amount = i64::try_from(amount).unwrap_or(i64::MAX);
        format::format_currency_with(amount, &self.currency_symbol)
    }
}

impl Default for CostEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ICostEstimator for CostEstimator {
    fn estimate_inputs(&self, inputs: &CostInputs) -> CostBreakdown {
        self.explain(inputs).breakdown
    }
}
