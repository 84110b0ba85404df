use super::{ConfigError, ProfileError};

/// Top-level error for the CancerInsight workspace.
///
/// The calculators themselves are total and never return this; it covers
/// the surrounding plumbing (config, profile parsing, strict code parsing).
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("profile error: {0}")]
    ProfileError(#[from] ProfileError),

    #[error("unknown {kind} code: {code:?}")]
    UnknownCode { kind: &'static str, code: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type InsightResult<T> = Result<T, InsightError>;
