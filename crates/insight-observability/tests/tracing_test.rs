use insight_core::config::ObservabilityConfig;
use insight_observability::tracing_setup::spans::names;
use insight_observability::{build_filter, catalog_span, cost_span, init_tracing, survival_span};

#[test]
fn filter_builds_from_config() {
    let config = ObservabilityConfig {
        log_level: "insight_cost=debug,warn".to_string(),
        json: false,
    };
    let filter = build_filter(&config);
    if std::env::var("RUST_LOG").is_err() {
        assert!(filter.to_string().contains("insight_cost=debug"));
    }
}

#[test]
fn invalid_directive_falls_back() {
    let config = ObservabilityConfig {
        log_level: "[[not a directive".to_string(),
        json: false,
    };
    // Must not panic.
    let _ = build_filter(&config);
}

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig {
        json: true,
        ..ObservabilityConfig::default()
    };
    init_tracing(&config);
    init_tracing(&ObservabilityConfig::default());
    tracing::info!("tracing initialised twice without panicking");
}

#[test]
fn spans_carry_their_names() {
    init_tracing(&ObservabilityConfig::default());
    let cost = cost_span!("chemo", "private");
    let survival = survival_span!(3usize);
    let catalog = catalog_span!("all", "prevalence");
    for (span, name) in [
        (cost, names::COST),
        (survival, names::SURVIVAL),
        (catalog, names::CATALOG),
    ] {
        if let Some(metadata) = span.metadata() {
            assert_eq!(metadata.name(), name);
        }
    }
}
