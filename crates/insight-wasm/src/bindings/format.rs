//! Formatting bindings: format_currency.

use wasm_bindgen::prelude::*;

use insight_core::format::format_currency_with;

use crate::runtime;

/// Whole-unit amount with the configured currency symbol. Fractions are
/// rounded; NaN renders as zero.
#[wasm_bindgen]
pub fn format_currency(amount: f64) -> String {
    // `as` saturates and maps NaN to 0.
    let amount = amount.round() as i64;
    format_currency_with(amount, &runtime::get().config.cost.currency_symbol)
}
