use crate::constants;

pub const DEFAULT_FALLBACK_BASE_COST: u64 = constants::FALLBACK_BASE_COST;
pub const DEFAULT_SUBSIDY_SHARE: f64 = constants::SUBSIDY_SHARE;
pub const DEFAULT_CURRENCY_SYMBOL: &str = constants::CURRENCY_SYMBOL;
pub const DEFAULT_SURVIVAL_FLOOR_PERCENT: u32 = constants::SURVIVAL_FLOOR_PERCENT;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
