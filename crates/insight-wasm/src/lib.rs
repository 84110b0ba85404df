//! # insight-wasm
//!
//! wasm-bindgen bindings for the browser UI.
//!
//! Every export takes and returns plain strings or numbers. Structured
//! values travel as JSON; failures come back as `{"error": ..., "kind": ...}`
//! rather than as exceptions, so no export panics across the boundary.
//!
//! - `runtime.rs`: the process-wide `InsightRuntime` holding config and engines
//! - `bindings/`: one module per UI concern
//! - `conversions/`: request types and JSON envelopes

pub mod bindings;
pub mod conversions;
pub mod runtime;
