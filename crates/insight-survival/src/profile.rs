//! Session health profile → comorbidity set.
//!
//! The assessment form persists its fields as a flat JSON object. Checkbox
//! fields are present with `"on"` when ticked; select fields carry their
//! option value.

use serde_json::{Map, Value};

use insight_core::errors::ProfileError;
use insight_core::models::{Comorbidity, ComorbidityProfile, SmokingStatus};

/// Checkbox fields that map one-to-one onto a condition. Obesity has a
/// hazard ratio but no form field, so a profile never flags it.
const FLAG_FIELDS: [(&str, Comorbidity); 6] = [
    ("diabetes", Comorbidity::Diabetes),
    ("hypertension", Comorbidity::Hypertension),
    ("heartDisease", Comorbidity::HeartDisease),
    ("kidneyDisease", Comorbidity::KidneyDisease),
    ("liverDisease", Comorbidity::LiverDisease),
    ("copd", Comorbidity::Copd),
];

const SMOKING_STATUS_FIELD: &str = "smokingStatus";
const ACTIVITY_LEVEL_FIELD: &str = "activityLevel";
const LOW_ACTIVITY: &str = "low";

/// Loosely-typed health profile as saved by the assessment form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthProfile {
    fields: Map<String, Value>,
}

impl HealthProfile {
    /// Parse a persisted profile blob.
    pub fn from_json(blob: &str) -> Result<Self, ProfileError> {
        let value: Value = serde_json::from_str(blob).map_err(|e| ProfileError::InvalidJson {
            reason: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Wrap an already-parsed value. Only JSON objects are profiles.
    pub fn from_value(value: Value) -> Result<Self, ProfileError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ProfileError::NotAnObject {
                found: json_kind(&other).to_string(),
            }),
        }
    }

    /// Whether a field is set, with form semantics: `false`, `0`, `""`,
    /// `null` and absent fields are unset; anything else is set.
    pub fn flag(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// String value of a field, if it is a string.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn smoking_status(&self) -> Option<SmokingStatus> {
        self.text(SMOKING_STATUS_FIELD)
            .and_then(SmokingStatus::from_code)
    }

    pub fn is_low_activity(&self) -> bool {
        self.text(ACTIVITY_LEVEL_FIELD) == Some(LOW_ACTIVITY)
    }

    /// Conditions flagged by this profile.
    pub fn comorbidities(&self) -> ComorbidityProfile {
        let mut profile: ComorbidityProfile = FLAG_FIELDS
            .iter()
            .filter(|(field, _)| self.flag(field))
            .map(|(_, condition)| *condition)
            .collect();
        if self.smoking_status() == Some(SmokingStatus::Current) {
            profile.insert(Comorbidity::Smoking);
        }
        if self.is_low_activity() {
            profile.insert(Comorbidity::LowActivity);
        }
        profile
    }
}

/// Comorbidities from an optional persisted blob.
///
/// A missing or unreadable blob means "no profile available" and yields an
/// empty set; the failure is logged, never propagated.
pub fn comorbidities_from_json(blob: Option<&str>) -> ComorbidityProfile {
    let Some(blob) = blob else {
        return ComorbidityProfile::new();
    };
    match HealthProfile::from_json(blob) {
        Ok(profile) => profile.comorbidities(),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unreadable health profile");
            ComorbidityProfile::new()
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
