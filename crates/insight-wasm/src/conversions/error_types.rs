use serde::Serialize;

use insight_core::errors::InsightError;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: String,
    kind: &'a str,
}

/// Short machine-readable category for an error.
pub fn error_kind(err: &InsightError) -> &'static str {
    match err {
        InsightError::ConfigError(_) => "config",
        InsightError::ProfileError(_) => "profile",
        InsightError::UnknownCode { .. } => "unknown_code",
        InsightError::SerializationError(_) => "serialization",
    }
}

/// Error object returned in place of a result.
pub fn error_json(err: &InsightError) -> String {
    tracing::warn!(error = %err, "binding call failed");
    let body = ErrorBody {
        error: err.to_string(),
        kind: error_kind(err),
    };
    serde_json::to_string(&body).unwrap_or_else(|_| r#"{"error":"unserializable error"}"#.to_string())
}
