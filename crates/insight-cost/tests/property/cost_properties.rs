use insight_core::models::*;
use insight_core::traits::ICostEstimator;
use insight_cost::{tables, CostEstimator};
use proptest::prelude::*;

fn arb_stage() -> impl Strategy<Value = Option<Stage>> {
    prop_oneof![
        Just(None),
        Just(Some(Stage::Early)),
        Just(Some(Stage::Advanced)),
        Just(Some(Stage::Metastatic)),
    ]
}

fn arb_tier() -> impl Strategy<Value = Option<CareTier>> {
    prop_oneof![
        Just(None),
        Just(Some(CareTier::PublicSubsidised)),
        Just(Some(CareTier::PublicPrivate)),
        Just(Some(CareTier::Private)),
    ]
}

fn arb_treatment() -> impl Strategy<Value = Option<Treatment>> {
    prop_oneof![
        Just(None),
        (0..Treatment::ALL.len()).prop_map(|i| Some(Treatment::ALL[i])),
    ]
}

fn arb_band() -> impl Strategy<Value = Option<IncomeBand>> {
    prop_oneof![
        Just(None),
        (0..IncomeBand::ALL.len()).prop_map(|i| Some(IncomeBand::ALL[i])),
    ]
}

fn arb_inputs() -> impl Strategy<Value = CostInputs> {
    (arb_stage(), arb_tier(), arb_treatment(), arb_band()).prop_map(
        |(stage, care_tier, treatment, income_band)| CostInputs {
            stage,
            care_tier,
            treatment,
            income_band,
        },
    )
}

proptest! {
    #[test]
    fn out_of_pocket_identity_holds(inputs in arb_inputs()) {
        let b = CostEstimator::new().estimate_inputs(&inputs);
        prop_assert_eq!(b.out_of_pocket, b.gross - b.insurance_coverage - b.subsidy);
        prop_assert!(b.insurance_coverage <= b.gross);
        prop_assert!(b.insurance_coverage + b.subsidy <= b.gross);
    }

    #[test]
    fn gross_matches_table_times_multiplier(inputs in arb_inputs()) {
        let b = CostEstimator::new().estimate_inputs(&inputs);
        let base = tables::lookup_base_cost(inputs.treatment, inputs.care_tier).unwrap_or(50_000);
        let expected = (base as f64 * tables::stage_multiplier(inputs.stage)).round() as u64;
        prop_assert_eq!(b.gross, expected);
    }

    #[test]
    fn subsidy_only_in_subsidised_public_tier(inputs in arb_inputs()) {
        let b = CostEstimator::new().estimate_inputs(&inputs);
        if inputs.care_tier != Some(CareTier::PublicSubsidised) {
            prop_assert_eq!(b.subsidy, 0);
        }
    }

    #[test]
    fn free_form_strings_never_panic(
        stage in ".{0,20}",
        tier in ".{0,20}",
        treatment in ".{0,20}",
        band in ".{0,20}",
    ) {
        let b = CostEstimator::new().estimate(&stage, &tier, &treatment, &band);
        prop_assert_eq!(b.out_of_pocket, b.gross - b.insurance_coverage - b.subsidy);
    }

    #[test]
    fn higher_income_never_raises_subsidy(
        stage in arb_stage(),
        treatment in arb_treatment(),
        i in 0usize..7,
    ) {
        let engine = CostEstimator::new();
        let lower = engine.estimate_inputs(&CostInputs {
            stage,
            care_tier: Some(CareTier::PublicSubsidised),
            treatment,
            income_band: Some(IncomeBand::ALL[i]),
        });
        let higher = engine.estimate_inputs(&CostInputs {
            stage,
            care_tier: Some(CareTier::PublicSubsidised),
            treatment,
            income_band: Some(IncomeBand::ALL[i + 1]),
        });
        prop_assert!(higher.subsidy <= lower.subsidy);
    }
}
