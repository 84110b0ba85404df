//! Static lookup tables. Process-wide constants, never mutated.

use insight_core::constants::DEFAULT_STAGE_MULTIPLIER;
use insight_core::models::{CareTier, IncomeBand, Stage, Treatment};

/// Annual base cost of a regimen at a given care tier.
pub fn base_cost(treatment: Treatment, tier: CareTier) -> u64 {
    let [public_sub, public_priv, private] = match treatment {
        Treatment::Surgery => [8_000, 25_000, 45_000],
        Treatment::Chemo => [12_000, 40_000, 80_000],
        Treatment::Radiation => [12_000, 30_000, 50_000],
        Treatment::SurgeryChemo => [18_000, 55_000, 100_000],
        Treatment::SurgeryChemoRad => [28_000, 75_000, 140_000],
        Treatment::Targeted => [50_000, 90_000, 120_000],
        Treatment::Immuno => [80_000, 150_000, 200_000],
        Treatment::Combined => [120_000, 200_000, 300_000],
    };
    match tier {
        CareTier::PublicSubsidised => public_sub,
        CareTier::PublicPrivate => public_priv,
        CareTier::Private => private,
    }
}

/// Base cost for possibly-unrecognised selections. `None` when either key is missing.
pub fn lookup_base_cost(treatment: Option<Treatment>, tier: Option<CareTier>) -> Option<u64> {
    Some(base_cost(treatment?, tier?))
}

/// Cost multiplier by disease stage. Unrecognised stages cost as `advanced`.
pub fn stage_multiplier(stage: Option<Stage>) -> f64 {
    match stage {
        Some(Stage::Early) => 0.6,
        Some(Stage::Advanced) => 1.0,
        Some(Stage::Metastatic) => 1.5,
        None => DEFAULT_STAGE_MULTIPLIER,
    }
}

/// Fraction of gross cost covered by basic insurance.
/// Unrecognised tiers get the private rate.
pub fn insurance_rate(tier: Option<CareTier>) -> f64 {
    match tier {
        Some(CareTier::PublicSubsidised) => 0.50,
        Some(CareTier::PublicPrivate) => 0.30,
        Some(CareTier::Private) | None => 0.15,
    }
}

/// Means-tested subsidy rate, decreasing with income. Unrecognised bands get 0.
pub fn subsidy_rate(band: Option<IncomeBand>) -> f64 {
    match band {
        Some(IncomeBand::UpTo1200) | Some(IncomeBand::UpTo2000) => 0.75,
        Some(IncomeBand::UpTo2800) => 0.60,
        Some(IncomeBand::UpTo3600) | Some(IncomeBand::UpTo4500) => 0.50,
        Some(IncomeBand::UpTo5500) | Some(IncomeBand::UpTo6500) => 0.40,
        Some(IncomeBand::Above6500) | None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_is_never_cheaper_than_public() {
        for treatment in Treatment::ALL {
            let sub = base_cost(treatment, CareTier::PublicSubsidised);
            let priv_class = base_cost(treatment, CareTier::PublicPrivate);
            let private = base_cost(treatment, CareTier::Private);
            assert!(sub <= priv_class && priv_class <= private, "{treatment}");
        }
    }

    #[test]
    fn subsidy_rate_decreases_with_income() {
        let rates: Vec<f64> = IncomeBand::ALL.into_iter().map(|b| subsidy_rate(Some(b))).collect();
        assert_eq!(rates.first(), Some(&0.75));
        assert_eq!(rates.last(), Some(&0.0));
        assert!(rates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn missing_keys_have_no_base_cost() {
        assert_eq!(lookup_base_cost(None, Some(CareTier::Private)), None);
        assert_eq!(lookup_base_cost(Some(Treatment::Chemo), None), None);
        assert_eq!(
            lookup_base_cost(Some(Treatment::Chemo), Some(CareTier::PublicPrivate)),
            Some(40_000)
        );
    }
}
