//! Survival bindings: adjust_survival, adjust_survival_json,
//! comorbidities_from_profile, survival_chart_json.

use wasm_bindgen::prelude::*;

use insight_core::errors::InsightResult;
use insight_core::models::CancerType;
use insight_core::traits::ISurvivalAdjuster;
use insight_observability::survival_span;
use insight_survival::{baseline, comorbidities_from_json, AdjustmentBreakdown, SurvivalChart};

use crate::conversions::request_types::SurvivalRequest;
use crate::conversions::respond;
use crate::runtime;

/// Adjusted survival percentage for a base value and condition codes.
#[wasm_bindgen]
pub fn adjust_survival(base: f64, conditions: Vec<String>) -> u32 {
    let _span = survival_span!(conditions.len()).entered();
    let codes: Vec<&str> = conditions.iter().map(String::as_str).collect();
    runtime::get().survival.adjust(base, &codes)
}

/// Full adjustment breakdown for a `{base, conditions}` JSON object.
#[wasm_bindgen]
pub fn adjust_survival_json(request: &str) -> String {
    respond(explain(request))
}

fn explain(request: &str) -> InsightResult<AdjustmentBreakdown> {
    let request: SurvivalRequest = serde_json::from_str(request)?;
    let _span = survival_span!(request.conditions.len()).entered();
    let codes: Vec<&str> = request.conditions.iter().map(String::as_str).collect();
    Ok(runtime::get().survival.explain_codes(request.base, &codes))
}

/// Condition codes flagged by a persisted health profile, as a JSON array.
/// A missing or unreadable profile yields `[]`.
#[wasm_bindgen]
pub fn comorbidities_from_profile(profile: Option<String>) -> String {
    let conditions = comorbidities_from_json(profile.as_deref());
    respond(Ok(conditions.codes()))
}

/// Chart data for a cancer type, adjusted for the profile's conditions
/// when one is given. `null` for an unrecognised cancer code.
#[wasm_bindgen]
pub fn survival_chart_json(cancer: &str, profile: Option<String>) -> String {
    respond(Ok(chart(cancer, profile.as_deref())))
}

fn chart(cancer: &str, profile: Option<&str>) -> Option<SurvivalChart> {
    let Some(cancer) = CancerType::from_code(cancer) else {
        tracing::debug!(cancer, "unrecognised cancer type, no chart");
        return None;
    };
    let conditions = comorbidities_from_json(profile);
    let _span = survival_span!(conditions.len()).entered();
    Some(baseline::adjusted_chart_series(
        &runtime::get().survival,
        cancer,
        &conditions,
    ))
}
