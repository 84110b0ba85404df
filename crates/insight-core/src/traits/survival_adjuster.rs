use crate::models::ComorbidityProfile;

/// Comorbidity adjustment of a baseline survival percentage.
pub trait ISurvivalAdjuster: Send + Sync {
    /// Adjust a baseline percentage for a typed set of conditions.
    fn adjust_profile(&self, base_percent: f64, profile: &ComorbidityProfile) -> u32;

    /// Adjust a baseline percentage for free-form condition codes.
    /// Unknown codes are ignored; repeated codes count once.
    fn adjust(&self, base_percent: f64, conditions: &[&str]) -> u32 {
        let profile = ComorbidityProfile::from_codes(conditions.iter().copied());
        self.adjust_profile(base_percent, &profile)
    }
}
