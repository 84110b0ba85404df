//! Golden adjustments shared with the browser bindings.

use insight_core::traits::ISurvivalAdjuster;
use insight_survival::SurvivalAdjuster;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenCase {
    name: String,
    base: f64,
    conditions: Vec<String>,
    expected: u32,
}

#[test]
fn golden_adjustments_match() {
    let cases: Vec<GoldenCase> = test_fixtures::load_fixture("golden/survival/adjustments.json");
    assert!(!cases.is_empty());

    let adjuster = SurvivalAdjuster::new();
    for case in &cases {
        let codes: Vec<&str> = case.conditions.iter().map(String::as_str).collect();
        assert_eq!(
            adjuster.adjust(case.base, &codes),
            case.expected,
            "case {}",
            case.name
        );
    }
}
