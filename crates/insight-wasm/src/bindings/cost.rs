//! Cost bindings: estimate_cost_json.

use wasm_bindgen::prelude::*;

use insight_core::errors::InsightResult;
use insight_observability::cost_span;

use crate::conversions::request_types::{CostRequest, CostResponse, FormattedBreakdown};
use crate::conversions::respond;
use crate::runtime;

/// Estimate from a `{stage, careTier, treatment, incomeBand}` JSON object.
#[wasm_bindgen]
pub fn estimate_cost_json(request: &str) -> String {
    respond(estimate(request))
}

fn estimate(request: &str) -> InsightResult<CostResponse> {
    let request: CostRequest = serde_json::from_str(request)?;
    let _span = cost_span!(request.treatment, request.care_tier).entered();
    let rt = runtime::get();
    let explanation = rt.cost.explain_codes(
        &request.stage,
        &request.care_tier,
        &request.treatment,
        &request.income_band,
    );
    let b = &explanation.breakdown;
    let formatted = FormattedBreakdown {
        gross: rt.cost.format_amount(b.gross),
        insurance_coverage: rt.cost.format_amount(b.insurance_coverage),
        subsidy: rt.cost.format_amount(b.subsidy),
        out_of_pocket: rt.cost.format_amount(b.out_of_pocket),
    };
    Ok(CostResponse {
        explanation,
        formatted,
    })
}
