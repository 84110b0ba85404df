use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Cancer types with published stage-specific survival curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CancerType {
    #[default]
    Breast,
    Colorectal,
    Lung,
    Prostate,
}

impl CancerType {
    pub const ALL: [CancerType; 4] = [Self::Breast, Self::Colorectal, Self::Lung, Self::Prostate];

    pub fn code(self) -> &'static str {
        match self {
            Self::Breast => "breast",
            Self::Colorectal => "colorectal",
            Self::Lung => "lung",
            Self::Prostate => "prostate",
        }
    }
}

code_enum!(CancerType, "cancer type");

/// TNM stage group.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum CancerStage {
    I,
    II,
    III,
    IV,
}

impl CancerStage {
    pub const ALL: [CancerStage; 4] = [Self::I, Self::II, Self::III, Self::IV];

    pub fn code(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
        }
    }

    /// Chart legend label, e.g. `Stage III`.
    pub fn label(self) -> String {
        format!("Stage {}", self.code())
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

code_enum!(CancerStage, "cancer stage");

/// Points on the survival curve, measured from diagnosis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum TimePoint {
    #[serde(rename = "diagnosis")]
    Diagnosis,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "3y")]
    ThreeYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
}

impl TimePoint {
    pub const ALL: [TimePoint; 5] = [
        Self::Diagnosis,
        Self::OneYear,
        Self::ThreeYears,
        Self::FiveYears,
        Self::TenYears,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Diagnosis => "diagnosis",
            Self::OneYear => "1y",
            Self::ThreeYears => "3y",
            Self::FiveYears => "5y",
            Self::TenYears => "10y",
        }
    }

    /// Chart axis label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Diagnosis => "Diagnosis",
            Self::OneYear => "1 Year",
            Self::ThreeYears => "3 Years",
            Self::FiveYears => "5 Years",
            Self::TenYears => "10 Years",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

code_enum!(TimePoint, "time point");
