//! # insight-cost
//!
//! Treatment cost estimator: gross cost from a (treatment, care tier) table
//! scaled by stage, insurance coverage by care tier, and a means-tested
//! subsidy for high-cost drug regimens in the subsidised public tier.

pub mod engine;
pub mod formula;
pub mod subsidy;
pub mod tables;

pub use engine::CostEstimator;
pub use formula::FormulaParams;
