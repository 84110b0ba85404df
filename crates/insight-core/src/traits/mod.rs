//! Seams between the UI bindings and the calculator engines.

pub mod cost_estimator;
pub mod survival_adjuster;

pub use cost_estimator::ICostEstimator;
pub use survival_adjuster::ISurvivalAdjuster;
