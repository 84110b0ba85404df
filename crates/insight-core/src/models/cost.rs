use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Disease stage as selected in the cost calculator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Early,
    Advanced,
    Metastatic,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Self::Early, Self::Advanced, Self::Metastatic];

    pub fn code(self) -> &'static str {
        match self {
            Self::Early => "early",
            Self::Advanced => "advanced",
            Self::Metastatic => "metastatic",
        }
    }
}

code_enum!(Stage, "stage");

/// Billing class of the treating institution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum CareTier {
    /// Fully subsidised public ward.
    #[serde(rename = "public-sub")]
    PublicSubsidised,
    /// Public institution, private class.
    #[serde(rename = "public-priv")]
    PublicPrivate,
    #[serde(rename = "private")]
    Private,
}

impl CareTier {
    pub const ALL: [CareTier; 3] = [Self::PublicSubsidised, Self::PublicPrivate, Self::Private];

    pub fn code(self) -> &'static str {
        match self {
            Self::PublicSubsidised => "public-sub",
            Self::PublicPrivate => "public-priv",
            Self::Private => "private",
        }
    }
}

code_enum!(CareTier, "care tier");

/// Treatment regimen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Treatment {
    #[serde(rename = "surgery")]
    Surgery,
    #[serde(rename = "chemo")]
    Chemo,
    #[serde(rename = "radiation")]
    Radiation,
    #[serde(rename = "surgery-chemo")]
    SurgeryChemo,
    #[serde(rename = "surgery-chemo-rad")]
    SurgeryChemoRad,
    #[serde(rename = "targeted")]
    Targeted,
    #[serde(rename = "immuno")]
    Immuno,
    #[serde(rename = "combined")]
    Combined,
}

impl Treatment {
    pub const ALL: [Treatment; 8] = [
        Self::Surgery,
        Self::Chemo,
        Self::Radiation,
        Self::SurgeryChemo,
        Self::SurgeryChemoRad,
        Self::Targeted,
        Self::Immuno,
        Self::Combined,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Surgery => "surgery",
            Self::Chemo => "chemo",
            Self::Radiation => "radiation",
            Self::SurgeryChemo => "surgery-chemo",
            Self::SurgeryChemoRad => "surgery-chemo-rad",
            Self::Targeted => "targeted",
            Self::Immuno => "immuno",
            Self::Combined => "combined",
        }
    }

    /// High-cost drug regimens covered by the means-tested subsidy.
    pub fn is_subsidised_drug_regimen(self) -> bool {
        matches!(self, Self::Targeted | Self::Immuno | Self::Combined)
    }
}

code_enum!(Treatment, "treatment");

/// Per-capita household income bracket (monthly).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum IncomeBand {
    #[serde(rename = "0-1200")]
    UpTo1200,
    #[serde(rename = "1201-2000")]
    UpTo2000,
    #[serde(rename = "2001-2800")]
    UpTo2800,
    #[serde(rename = "2801-3600")]
    UpTo3600,
    #[serde(rename = "3601-4500")]
    UpTo4500,
    #[serde(rename = "4501-5500")]
    UpTo5500,
    #[serde(rename = "5501-6500")]
    UpTo6500,
    #[serde(rename = "above-6500")]
    Above6500,
}

impl IncomeBand {
    /// Ordered from lowest to highest income.
    pub const ALL: [IncomeBand; 8] = [
        Self::UpTo1200,
        Self::UpTo2000,
        Self::UpTo2800,
        Self::UpTo3600,
        Self::UpTo4500,
        Self::UpTo5500,
        Self::UpTo6500,
        Self::Above6500,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::UpTo1200 => "0-1200",
            Self::UpTo2000 => "1201-2000",
            Self::UpTo2800 => "2001-2800",
            Self::UpTo3600 => "2801-3600",
            Self::UpTo4500 => "3601-4500",
            Self::UpTo5500 => "4501-5500",
            Self::UpTo6500 => "5501-6500",
            Self::Above6500 => "above-6500",
        }
    }
}

code_enum!(IncomeBand, "income band");

/// Calculator selections. `None` marks a value the form sent that is not
/// in the closed vocabulary; the estimator applies its fallbacks for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostInputs {
    pub stage: Option<Stage>,
    pub care_tier: Option<CareTier>,
    pub treatment: Option<Treatment>,
    pub income_band: Option<IncomeBand>,
}

impl CostInputs {
    pub fn new(
        stage: Stage,
        care_tier: CareTier,
        treatment: Treatment,
        income_band: IncomeBand,
    ) -> Self {
        Self {
            stage: Some(stage),
            care_tier: Some(care_tier),
            treatment: Some(treatment),
            income_band: Some(income_band),
        }
    }

    /// Build from raw form values. Unrecognised codes become `None`.
    pub fn from_codes(stage: &str, care_tier: &str, treatment: &str, income_band: &str) -> Self {
        Self {
            stage: Stage::from_code(stage),
            care_tier: CareTier::from_code(care_tier),
            treatment: Treatment::from_code(treatment),
            income_band: IncomeBand::from_code(income_band),
        }
    }
}

/// Four-field monetary result of a cost estimate.
///
/// `out_of_pocket == gross - insurance_coverage - subsidy` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    #[ts(type = "number")]
    pub gross: u64,
    #[ts(type = "number")]
    pub insurance_coverage: u64,
    #[ts(type = "number")]
    pub subsidy: u64,
    #[ts(type = "number")]
    pub out_of_pocket: u64,
}

/// A breakdown together with every intermediate value that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CostExplanation {
    pub inputs: CostInputs,
    #[ts(type = "number")]
    pub base_cost: u64,
    /// True when the (treatment, care tier) pair was not in the table.
    pub used_fallback_cost: bool,
    pub stage_multiplier: f64,
    pub insurance_rate: f64,
    pub subsidy_eligible: bool,
    pub subsidy_rate: f64,
    pub breakdown: CostBreakdown,
}
