use crate::models::{CostBreakdown, CostInputs};

/// Treatment cost estimation. Total over its input domain.
pub trait ICostEstimator: Send + Sync {
    /// Estimate a breakdown from typed selections.
    fn estimate_inputs(&self, inputs: &CostInputs) -> CostBreakdown;

    /// Estimate a breakdown from raw form values.
    fn estimate(
        &self,
        stage: &str,
        care_tier: &str,
        treatment: &str,
        income_band: &str,
    ) -> CostBreakdown {
        self.estimate_inputs(&CostInputs::from_codes(
            stage,
            care_tier,
            treatment,
            income_band,
        ))
    }
}
