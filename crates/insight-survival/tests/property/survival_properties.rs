use insight_core::models::{Comorbidity, ComorbidityProfile};
use insight_core::traits::ISurvivalAdjuster;
use insight_survival::{hazard, SurvivalAdjuster};
use proptest::prelude::*;

fn arb_profile() -> impl Strategy<Value = ComorbidityProfile> {
    proptest::collection::vec(0..Comorbidity::ALL.len(), 0..6)
        .prop_map(|idx| idx.into_iter().map(|i| Comorbidity::ALL[i]).collect())
}

proptest! {
    #[test]
    fn never_below_floor(base in -1000.0f64..1000.0, profile in arb_profile()) {
        let adjusted = SurvivalAdjuster::new().adjust_profile(base, &profile);
        prop_assert!(adjusted >= 5);
    }

    #[test]
    fn never_raises_survival(base in 5u32..=100, profile in arb_profile()) {
        let adjusted = SurvivalAdjuster::new().adjust_profile(f64::from(base), &profile);
        prop_assert!(adjusted <= base);
    }

    #[test]
    fn equals_single_division_by_product(base in 5.0f64..100.0, profile in arb_profile()) {
        let adjuster = SurvivalAdjuster::new();
        let breakdown = adjuster.explain(base, &profile);
        let expected = base / hazard::combined_ratio(&profile);
        prop_assert!((breakdown.raw_percent - expected).abs() < 1e-9);
    }

    #[test]
    fn unknown_codes_leave_integer_bases_unchanged(base in 5u32..=100, code in "[a-z]{12,20}") {
        prop_assume!(Comorbidity::from_code(&code).is_none());
        let adjusted = SurvivalAdjuster::new().adjust(f64::from(base), &[code.as_str()]);
        prop_assert_eq!(adjusted, base);
    }

    #[test]
    fn adding_a_condition_never_helps(base in 5u32..=100, profile in arb_profile(), extra in 0..Comorbidity::ALL.len()) {
        let adjuster = SurvivalAdjuster::new();
        let before = adjuster.adjust_profile(f64::from(base), &profile);
        let mut worse = profile.clone();
        worse.insert(Comorbidity::ALL[extra]);
        let after = adjuster.adjust_profile(f64::from(base), &worse);
        prop_assert!(after <= before);
    }
}
