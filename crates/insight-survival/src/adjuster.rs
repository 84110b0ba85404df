use serde::Serialize;

use insight_core::config::SurvivalConfig;
use insight_core::constants::SURVIVAL_FLOOR_PERCENT;
use insight_core::models::{Comorbidity, ComorbidityProfile};
use insight_core::traits::ISurvivalAdjuster;

use crate::hazard;

/// One condition's contribution to an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedRatio {
    pub condition: Comorbidity,
    pub ratio: f64,
}

/// Adjustment with every intermediate value, for display and debugging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentBreakdown {
    pub base_percent: f64,
    pub applied: Vec<AppliedRatio>,
    /// Product of all applied ratios.
    pub combined_ratio: f64,
    /// Value after division, before rounding and flooring.
    pub raw_percent: f64,
    pub adjusted_percent: u32,
}

/// Survival adjuster. Divides a baseline survival percentage by the hazard
/// ratio of every condition present, then rounds and floors the result.
#[derive(Debug, Clone)]
pub struct SurvivalAdjuster {
    floor_percent: u32,
}

impl SurvivalAdjuster {
    /// Create an adjuster with the default floor (5%).
    pub fn new() -> Self {
        Self::with_floor(SURVIVAL_FLOOR_PERCENT)
    }

    /// Create with a custom floor.
    pub fn with_floor(floor_percent: u32) -> Self {
        Self { floor_percent }
    }

    /// Create from the `[survival]` config section.
    pub fn from_config(config: &SurvivalConfig) -> Self {
        Self::with_floor(config.floor_percent)
    }

    pub fn floor_percent(&self) -> u32 {
        self.floor_percent
    }

    /// Adjust with a full breakdown of each applied ratio.
    pub fn explain(&self, base_percent: f64, profile: &ComorbidityProfile) -> AdjustmentBreakdown {
        let applied: Vec<AppliedRatio> = profile
            .iter()
            .map(|condition| AppliedRatio {
                condition,
                ratio: hazard::hazard_ratio(condition).applied(),
            })
            .collect();

        let combined_ratio = hazard::combined_ratio(profile);
        let raw_percent = base_percent / combined_ratio;

        AdjustmentBreakdown {
            base_percent,
            applied,
            combined_ratio,
            raw_percent,
            adjusted_percent: self.finalize(raw_percent),
        }
    }

    /// Explain an adjustment for free-form condition codes.
    pub fn explain_codes(&self, base_percent: f64, conditions: &[&str]) -> AdjustmentBreakdown {
        let ignored = conditions
            .iter()
            .filter(|code| hazard::lookup(code).is_none())
            .count();
        if ignored > 0 {
            tracing::debug!(ignored, "ignoring unrecognised condition codes");
        }
        let profile = ComorbidityProfile::from_codes(conditions.iter().copied());
        self.explain(base_percent, &profile)
    }

    /// Round to a whole percentage and apply the floor.
    fn finalize(&self, raw_percent: f64) -> u32 {
        let floor = f64::from(self.floor_percent);
        if !raw_percent.is_finite() {
            return self.floor_percent;
        }
        // `as` saturates above u32::MAX.
        raw_percent.round().max(floor) as u32
    }
}

impl Default for SurvivalAdjuster {
    fn default() -> Self {
        Self::new()
    }
}

impl ISurvivalAdjuster for SurvivalAdjuster {
    fn adjust_profile(&self, base_percent: f64, profile: &ComorbidityProfile) -> u32 {
        self.explain(base_percent, profile).adjusted_percent
    }

    fn adjust(&self, base_percent: f64, conditions: &[&str]) -> u32 {
        self.explain_codes(base_percent, conditions).adjusted_percent
    }
}
