use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Comorbid condition with a published hazard ratio.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Comorbidity {
    Diabetes,
    Hypertension,
    HeartDisease,
    KidneyDisease,
    LiverDisease,
    Copd,
    Obesity,
    /// Current smoker. Former and never smokers are not flagged.
    Smoking,
    LowActivity,
}

impl Comorbidity {
    pub const ALL: [Comorbidity; 9] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::HeartDisease,
        Self::KidneyDisease,
        Self::LiverDisease,
        Self::Copd,
        Self::Obesity,
        Self::Smoking,
        Self::LowActivity,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::Hypertension => "hypertension",
            Self::HeartDisease => "heartDisease",
            Self::KidneyDisease => "kidneyDisease",
            Self::LiverDisease => "liverDisease",
            Self::Copd => "copd",
            Self::Obesity => "obesity",
            Self::Smoking => "smoking",
            Self::LowActivity => "lowActivity",
        }
    }
}

code_enum!(Comorbidity, "comorbidity");

/// Smoking history as recorded on the assessment form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    Current,
    Former,
    Never,
}

impl SmokingStatus {
    pub const ALL: [SmokingStatus; 3] = [Self::Current, Self::Former, Self::Never];

    pub fn code(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Former => "former",
            Self::Never => "never",
        }
    }
}

code_enum!(SmokingStatus, "smoking status");

/// Set of conditions present for one person. Ordered, duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct ComorbidityProfile(BTreeSet<Comorbidity>);

impl ComorbidityProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from free-form condition codes, silently dropping unknown ones.
    pub fn from_codes<'a, I>(codes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        codes.into_iter().filter_map(Comorbidity::from_code).collect()
    }

    /// Returns `true` if the condition was not already present.
    pub fn insert(&mut self, condition: Comorbidity) -> bool {
        self.0.insert(condition)
    }

    pub fn contains(&self, condition: Comorbidity) -> bool {
        self.0.contains(&condition)
    }

    pub fn iter(&self) -> impl Iterator<Item = Comorbidity> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wire codes, in canonical order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.iter().map(Comorbidity::code).collect()
    }
}

impl FromIterator<Comorbidity> for ComorbidityProfile {
    fn from_iter<T: IntoIterator<Item = Comorbidity>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Comorbidity> for ComorbidityProfile {
    fn extend<T: IntoIterator<Item = Comorbidity>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
