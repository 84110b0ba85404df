/// Errors reading a session-persisted health profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("health profile is not valid JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("health profile must be a JSON object, got {found}")]
    NotAnObject { found: String },
}
