//! InsightRuntime: the resolved config and the engines built from it.
//!
//! Lazily initialised with defaults on first use. `configure` swaps in a
//! runtime built from a TOML string; callers holding the previous `Arc`
//! finish with the config they started with.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use insight_core::errors::InsightResult;
use insight_core::InsightConfig;
use insight_cost::CostEstimator;
use insight_survival::SurvivalAdjuster;

static RUNTIME: OnceLock<RwLock<Arc<InsightRuntime>>> = OnceLock::new();

/// Config plus the engines derived from it.
#[derive(Debug)]
pub struct InsightRuntime {
    pub config: InsightConfig,
    pub cost: CostEstimator,
    pub survival: SurvivalAdjuster,
}

impl InsightRuntime {
    pub fn new(config: InsightConfig) -> Self {
        Self {
            cost: CostEstimator::from_config(&config.cost),
            survival: SurvivalAdjuster::from_config(&config.survival),
            config,
        }
    }
}

impl Default for InsightRuntime {
    fn default() -> Self {
        Self::new(InsightConfig::default())
    }
}

fn slot() -> &'static RwLock<Arc<InsightRuntime>> {
    RUNTIME.get_or_init(|| {
        let runtime = InsightRuntime::default();
        insight_observability::init_tracing(&runtime.config.observability);
        RwLock::new(Arc::new(runtime))
    })
}

/// The current runtime.
pub fn get() -> Arc<InsightRuntime> {
    slot()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the runtime with one built from `toml`. Omitted keys keep their
/// defaults. On error the current runtime is left untouched.
pub fn configure(toml: &str) -> InsightResult<Arc<InsightRuntime>> {
    let config = InsightConfig::from_toml(toml)?;
    insight_observability::init_tracing(&config.observability);
    let runtime = Arc::new(InsightRuntime::new(config));
    *slot().write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&runtime);
    tracing::info!("runtime reconfigured");
    Ok(runtime)
}

/// Restore the compiled defaults.
pub fn reset() {
    *slot().write().unwrap_or_else(PoisonError::into_inner) =
        Arc::new(InsightRuntime::default());
}
