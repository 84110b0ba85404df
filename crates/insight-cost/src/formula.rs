use insight_core::constants::{FALLBACK_BASE_COST, SUBSIDY_SHARE};
use insight_core::models::{CostBreakdown, CostExplanation, CostInputs};

use crate::{subsidy, tables};

/// Tunables of the cost formula. Defaults reproduce the published calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaParams {
    /// Base cost for (treatment, care tier) pairs missing from the table.
    pub fallback_base_cost: u64,
    /// Share of the income-band subsidy rate applied to the post-insurance balance.
    pub subsidy_share: f64,
}

impl Default for FormulaParams {
    fn default() -> Self {
        Self {
            fallback_base_cost: FALLBACK_BASE_COST,
            subsidy_share: SUBSIDY_SHARE,
        }
    }
}

/// Cost estimate with every intermediate value.
///
/// ```text
/// gross         = round(baseCost × stageMultiplier)
/// coverage      = round(gross × insuranceRate)
/// subsidy       = eligible ? round((gross − coverage) × subsidyRate × share) : 0
/// outOfPocket   = gross − coverage − subsidy
/// ```
pub fn explain(inputs: &CostInputs, params: &FormulaParams) -> CostExplanation {
    let looked_up = tables::lookup_base_cost(inputs.treatment, inputs.care_tier);
    let base_cost = looked_up.unwrap_or(params.fallback_base_cost);
    let stage_multiplier = tables::stage_multiplier(inputs.stage);
    let gross = round_amount(base_cost as f64 * stage_multiplier);

    let insurance_rate = tables::insurance_rate(inputs.care_tier);
    // Rates are at most 1.0; the min only guards the invariant.
    let insurance_coverage = round_amount(gross as f64 * insurance_rate).min(gross);

    let subsidy_eligible = subsidy::is_eligible(inputs.care_tier, inputs.treatment);
    let subsidy_rate = tables::subsidy_rate(inputs.income_band);
    let subsidy = if subsidy_eligible {
        subsidy::amount(gross, insurance_coverage, subsidy_rate, params.subsidy_share)
    } else {
        0
    };

    CostExplanation {
        inputs: *inputs,
        base_cost,
        used_fallback_cost: looked_up.is_none(),
        stage_multiplier,
        insurance_rate,
        subsidy_eligible,
        subsidy_rate,
        breakdown: CostBreakdown {
            gross,
            insurance_coverage,
            subsidy,
            out_of_pocket: gross - insurance_coverage - subsidy,
        },
    }
}

/// Cost estimate, breakdown only.
pub fn compute(inputs: &CostInputs, params: &FormulaParams) -> CostBreakdown {
    explain(inputs, params).breakdown
}

/// Round a non-negative amount half-up to whole currency units.
/// Negative and NaN inputs map to 0.
pub fn round_amount(value: f64) -> u64 {
    // `as` saturates at the u64 bounds and maps NaN to 0.
    value.round().max(0.0) as u64
}
