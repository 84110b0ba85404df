//! Config bindings: configure, reset_config.

use wasm_bindgen::prelude::*;

use insight_core::InsightConfig;

use crate::conversions::respond;
use crate::runtime;

/// Apply a TOML config. Returns the effective config as JSON, or an error
/// object leaving the previous config in place.
#[wasm_bindgen]
pub fn configure(toml: &str) -> String {
    respond(runtime::configure(toml).map(|rt| rt.config.clone()))
}

/// Restore the default config. Returns it as JSON.
#[wasm_bindgen]
pub fn reset_config() -> String {
    runtime::reset();
    let config: InsightConfig = runtime::get().config.clone();
    respond(Ok(config))
}
