//! Hazard ratios for comorbid conditions. Process-wide constants.

use insight_core::models::{Comorbidity, ComorbidityProfile, SmokingStatus};

/// Multiplicative risk factor for one condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HazardRatio {
    Scalar(f64),
    /// Smoking carries a ratio per smoking history.
    BySmokingStatus { current: f64, former: f64, never: f64 },
}

impl HazardRatio {
    /// Ratio for a given smoking history. Scalars ignore the status.
    pub fn for_status(self, status: SmokingStatus) -> f64 {
        match self {
            Self::Scalar(ratio) => ratio,
            Self::BySmokingStatus {
                current,
                former,
                never,
            } => match status {
                SmokingStatus::Current => current,
                SmokingStatus::Former => former,
                SmokingStatus::Never => never,
            },
        }
    }

    /// Ratio the survival adjuster divides by. The smoking condition is
    /// only ever flagged for current smokers, so it uses that sub-ratio.
    pub fn applied(self) -> f64 {
        self.for_status(SmokingStatus::Current)
    }
}

/// Hazard ratio of a condition.
pub fn hazard_ratio(condition: Comorbidity) -> HazardRatio {
    match condition {
        Comorbidity::Diabetes => HazardRatio::Scalar(1.41),
        Comorbidity::Hypertension => HazardRatio::Scalar(1.15),
        Comorbidity::HeartDisease => HazardRatio::Scalar(1.30),
        Comorbidity::KidneyDisease => HazardRatio::Scalar(1.50),
        Comorbidity::LiverDisease => HazardRatio::Scalar(1.45),
        Comorbidity::Copd => HazardRatio::Scalar(1.35),
        Comorbidity::Obesity => HazardRatio::Scalar(1.20),
        Comorbidity::Smoking => HazardRatio::BySmokingStatus {
            current: 2.15,
            former: 1.45,
            never: 1.0,
        },
        Comorbidity::LowActivity => HazardRatio::Scalar(1.59),
    }
}

/// Hazard ratio by condition code. `None` for unrecognised codes.
pub fn lookup(code: &str) -> Option<HazardRatio> {
    Comorbidity::from_code(code).map(hazard_ratio)
}

/// Product of the applied ratios of every condition in the profile.
pub fn combined_ratio(profile: &ComorbidityProfile) -> f64 {
    profile.iter().map(|c| hazard_ratio(c).applied()).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ratio_is_at_least_one() {
        for condition in Comorbidity::ALL {
            for status in SmokingStatus::ALL {
                assert!(hazard_ratio(condition).for_status(status) >= 1.0);
            }
        }
    }

    #[test]
    fn smoking_uses_current_ratio() {
        assert_eq!(hazard_ratio(Comorbidity::Smoking).applied(), 2.15);
        assert_eq!(
            hazard_ratio(Comorbidity::Smoking).for_status(SmokingStatus::Former),
            1.45
        );
    }

    #[test]
    fn unknown_codes_have_no_ratio() {
        assert!(lookup("unknownCode").is_none());
        assert_eq!(lookup("copd"), Some(HazardRatio::Scalar(1.35)));
    }

    #[test]
    fn empty_profile_has_unit_ratio() {
        assert_eq!(combined_ratio(&ComorbidityProfile::new()), 1.0);
    }
}
