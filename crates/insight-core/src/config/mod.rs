//! Configuration for the CancerInsight calculators.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod cost_config;
pub mod defaults;
pub mod insight_config;
pub mod observability_config;
pub mod survival_config;

pub use cost_config::CostConfig;
pub use insight_config::InsightConfig;
pub use observability_config::ObservabilityConfig;
pub use survival_config::SurvivalConfig;
