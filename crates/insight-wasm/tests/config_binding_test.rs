//! Reconfiguration mutates the process-wide runtime, so everything that
//! depends on it lives in one test.

use insight_wasm::bindings::config::{configure, reset_config};
use insight_wasm::bindings::cost::estimate_cost_json;
use insight_wasm::bindings::format::format_currency;
use insight_wasm::bindings::survival::adjust_survival;
use insight_wasm::runtime;
use serde_json::Value;

#[test]
fn configure_swaps_engines_and_reset_restores_defaults() {
    let applied: Value = serde_json::from_str(&configure(
        r#"
[cost]
fallback_base_cost = 60000
currency_symbol = "S$"

[survival]
floor_percent = 1
"#,
    ))
    .unwrap();
    assert_eq!(applied["cost"]["fallback_base_cost"], 60000);
    assert_eq!(applied["cost"]["subsidy_share"], 0.5);
    assert_eq!(runtime::get().survival.floor_percent(), 1);

    assert_eq!(format_currency(2500.0), "S$2,500");
    assert_eq!(adjust_survival(3.0, vec!["smoking".to_string()]), 1);
    let estimate: Value = serde_json::from_str(&estimate_cost_json(
        r#"{"stage":"early","careTier":"private","treatment":"unknown","incomeBand":"0-1200"}"#,
    ))
    .unwrap();
    assert_eq!(estimate["baseCost"], 60000);

    // Invalid config is rejected and the previous one stays.
    let rejected: Value =
        serde_json::from_str(&configure("[cost]\nsubsidy_share = 2.0\n")).unwrap();
    assert_eq!(rejected["kind"], "config");
    assert_eq!(runtime::get().config.cost.fallback_base_cost, 60000);

    let defaults: Value = serde_json::from_str(&reset_config()).unwrap();
    assert_eq!(defaults["cost"]["fallback_base_cost"], 50000);
    assert_eq!(format_currency(2500.0), "$2,500");
    assert_eq!(adjust_survival(3.0, vec!["smoking".to_string()]), 5);
}
