//! Request types and JSON envelopes shared by the bindings.

pub mod error_types;
pub mod request_types;

use serde::Serialize;

use insight_core::errors::InsightResult;

/// Serialize a result for the UI: the value itself on success, an error
/// object on failure.
pub fn respond<T: Serialize>(result: InsightResult<T>) -> String {
    match result.and_then(|value| Ok(serde_json::to_string(&value)?)) {
        Ok(json) => json,
        Err(e) => error_types::error_json(&e),
    }
}
