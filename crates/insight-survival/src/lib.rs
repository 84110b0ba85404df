//! # insight-survival
//!
//! Survival adjustment for comorbid conditions, the static stage-specific
//! baseline survival table the charts read from, and extraction of a
//! comorbidity set from the session health profile.

pub mod adjuster;
pub mod baseline;
pub mod hazard;
pub mod profile;

pub use adjuster::{AdjustmentBreakdown, AppliedRatio, SurvivalAdjuster};
pub use baseline::{ChartDataset, SurvivalChart};
pub use hazard::HazardRatio;
pub use profile::{comorbidities_from_json, HealthProfile};
