use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which patients a cancer card applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CardGender {
    Male,
    Female,
    #[default]
    Both,
}

/// One card on the catalog page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CancerCard {
    pub name: String,
    /// Cards without a gender apply to everyone.
    #[serde(default)]
    pub gender: CardGender,
    /// 1 is the most common cancer. Absent for unranked cancers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevalence_rank: Option<u32>,
    /// Five-year survival percentage, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survival: Option<u32>,
}

impl CancerCard {
    pub fn new(name: impl Into<String>, gender: CardGender) -> Self {
        Self {
            name: name.into(),
            gender,
            prevalence_rank: None,
            survival: None,
        }
    }

    pub fn with_prevalence_rank(mut self, rank: u32) -> Self {
        self.prevalence_rank = Some(rank);
        self
    }

    pub fn with_survival(mut self, percent: u32) -> Self {
        self.survival = Some(percent);
        self
    }
}
