/// CancerInsight core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base cost used when a (treatment, care tier) pair is not in the cost table.
pub const FALLBACK_BASE_COST: u64 = 50_000;

/// Stage multiplier used when the stage is not recognised.
pub const DEFAULT_STAGE_MULTIPLIER: f64 = 1.0;

/// Fraction of the means-tested subsidy rate actually applied to the
/// post-insurance balance.
pub const SUBSIDY_SHARE: f64 = 0.5;

/// Lowest adjusted survival percentage ever displayed.
pub const SURVIVAL_FLOOR_PERCENT: u32 = 5;

/// Currency symbol prefixed to formatted amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// Rank assigned to catalog cards with no prevalence rank.
pub const UNRANKED_PREVALENCE: u32 = 999;
