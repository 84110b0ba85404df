//! Tracing setup: `EnvFilter` from `RUST_LOG` or the configured level,
//! human-readable or JSON output.

pub mod spans;

use std::sync::Once;

use insight_core::config::defaults::DEFAULT_LOG_LEVEL;
use insight_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Filter for the given config. `RUST_LOG` wins when set and valid; an
/// invalid configured directive falls back to `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global subscriber.
///
/// Idempotent. If another subscriber is already installed (e.g. by a test
/// harness or the embedding host) it is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        let installed = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
