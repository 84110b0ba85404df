//! # insight-observability
//!
//! Tracing subscriber installation and the spans the calculators run under.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing};
