//! Span definitions per calculator: cost, survival, catalog.

/// Create a cost estimation span.
#[macro_export]
macro_rules! cost_span {
    ($treatment:expr, $care_tier:expr) => {
        tracing::info_span!("insight.cost", treatment = %$treatment, care_tier = %$care_tier)
    };
}

/// Create a survival adjustment span.
#[macro_export]
macro_rules! survival_span {
    ($condition_count:expr) => {
        tracing::info_span!("insight.survival", condition_count = $condition_count)
    };
}

/// Create a catalog filter span.
#[macro_export]
macro_rules! catalog_span {
    ($gender:expr, $sort:expr) => {
        tracing::info_span!("insight.catalog", gender = %$gender, sort = %$sort)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const COST: &str = "insight.cost";
    pub const SURVIVAL: &str = "insight.survival";
    pub const CATALOG: &str = "insight.catalog";
}
