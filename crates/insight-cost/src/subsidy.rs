//! Means-tested subsidy for high-cost drug regimens.

use insight_core::models::{CareTier, Treatment};

/// Eligible only in the subsidised public tier, and only for targeted,
/// immunotherapy or combined regimens.
pub fn is_eligible(tier: Option<CareTier>, treatment: Option<Treatment>) -> bool {
    tier == Some(CareTier::PublicSubsidised)
        && treatment.is_some_and(Treatment::is_subsidised_drug_regimen)
}

/// Subsidy on the balance left after insurance.
///
/// Never exceeds `gross - coverage` as long as `rate * share <= 1`.
pub fn amount(gross: u64, coverage: u64, rate: f64, share: f64) -> u64 {
    let balance = gross.saturating_sub(coverage) as f64;
    let subsidy = crate::formula::round_amount(balance * rate * share);
    subsidy.min(gross.saturating_sub(coverage))
}
