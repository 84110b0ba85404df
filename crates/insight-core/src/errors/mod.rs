//! Error handling for CancerInsight.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod insight_error;
pub mod profile_error;

pub use config_error::ConfigError;
pub use insight_error::{InsightError, InsightResult};
pub use profile_error::ProfileError;
