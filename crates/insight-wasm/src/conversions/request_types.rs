//! Payloads sent by the UI handlers. Missing fields default to empty,
//! which the calculators treat like any other unrecognised value.

use serde::{Deserialize, Serialize};

use insight_core::models::CostExplanation;

/// The four select values of the cost form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CostRequest {
    pub stage: String,
    pub care_tier: String,
    pub treatment: String,
    pub income_band: String,
}

/// Estimate plus the amounts already formatted for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostResponse {
    #[serde(flatten)]
    pub explanation: CostExplanation,
    pub formatted: FormattedBreakdown,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedBreakdown {
    pub gross: String,
    pub insurance_coverage: String,
    pub subsidy: String,
    pub out_of_pocket: String,
}

/// A base survival percentage and the condition codes to apply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SurvivalRequest {
    pub base: f64,
    pub conditions: Vec<String>,
}
