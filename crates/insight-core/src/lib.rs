//! # insight-core
//!
//! Foundation crate for the CancerInsight calculators.
//! Defines the categorical input types, result types, traits, errors,
//! config, constants, and display formatting. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod format;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::InsightConfig;
pub use errors::{InsightError, InsightResult};
pub use models::{
    CancerStage, CancerType, CareTier, Comorbidity, ComorbidityProfile, CostBreakdown,
    CostExplanation, CostInputs, IncomeBand, Stage, TimePoint, Treatment,
};
