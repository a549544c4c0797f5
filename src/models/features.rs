//! Feature form model
//!
//! The eight original-cased features sent to the prediction service,
//! plus the form-level checks that run before anything is submitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::scoring::PatientMetrics;

/// Form field description, in payload order
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

pub const FEATURES: [FeatureSpec; 8] = [
    FeatureSpec { key: "Pregnancies", label: "Pregnancies", min: 0.0, max: 17.0, step: 1.0, default: 3.0 },
    FeatureSpec { key: "Glucose", label: "Glucose (mg/dL)", min: 0.0, max: 250.0, step: 1.0, default: 120.0 },
    FeatureSpec { key: "BloodPressure", label: "Blood Pressure (mm Hg)", min: 0.0, max: 140.0, step: 1.0, default: 70.0 },
    FeatureSpec { key: "SkinThickness", label: "Skin Thickness (mm)", min: 0.0, max: 99.0, step: 1.0, default: 20.0 },
    FeatureSpec { key: "Insulin", label: "Insulin (mu U/ml)", min: 0.0, max: 900.0, step: 1.0, default: 80.0 },
    FeatureSpec { key: "BMI", label: "BMI (kg/m²)", min: 0.0, max: 70.0, step: 0.1, default: 32.0 },
    FeatureSpec { key: "DiabetesPedigreeFunction", label: "Diabetes Pedigree Function", min: 0.0, max: 2.5, step: 0.001, default: 0.47 },
    FeatureSpec { key: "Age", label: "Age (years)", min: 18.0, max: 100.0, step: 1.0, default: 33.0 },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a valid number for {label}. Value found: '{found}' for {key}")]
    InvalidNumber {
        key: &'static str,
        label: &'static str,
        found: String,
    },
}

/// Request body for the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct FeatureVector {
    #[validate(range(min = 0.0, max = 17.0, message = "Pregnancies must be between 0 and 17"))]
    pub pregnancies: f64,
    #[validate(range(min = 0.0, max = 250.0, message = "Glucose (mg/dL) must be between 0 and 250"))]
    pub glucose: f64,
    #[validate(range(min = 0.0, max = 140.0, message = "Blood Pressure (mm Hg) must be between 0 and 140"))]
    pub blood_pressure: f64,
    #[validate(range(min = 0.0, max = 99.0, message = "Skin Thickness (mm) must be between 0 and 99"))]
    pub skin_thickness: f64,
    #[validate(range(min = 0.0, max = 900.0, message = "Insulin (mu U/ml) must be between 0 and 900"))]
    pub insulin: f64,
    #[serde(rename = "BMI")]
    #[validate(range(min = 0.0, max = 70.0, message = "BMI (kg/m²) must be between 0 and 70"))]
    pub bmi: f64,
    #[validate(range(min = 0.0, max = 2.5, message = "Diabetes Pedigree Function must be between 0 and 2.5"))]
    pub diabetes_pedigree_function: f64,
    #[validate(range(min = 18.0, max = 100.0, message = "Age (years) must be between 18 and 100"))]
    pub age: f64,
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            pregnancies: FEATURES[0].default,
            glucose: FEATURES[1].default,
            blood_pressure: FEATURES[2].default,
            skin_thickness: FEATURES[3].default,
            insulin: FEATURES[4].default,
            bmi: FEATURES[5].default,
            diabetes_pedigree_function: FEATURES[6].default,
            age: FEATURES[7].default,
        }
    }
}

impl FeatureVector {
    /// Parse raw form values, failing on the first field that is not a number
    ///
    /// Accepts JSON numbers and numeric strings. Range checks are separate
    /// (`Validate::validate`).
    pub fn from_form(form: &Map<String, Value>) -> Result<Self, FormError> {
        let mut values = [0.0f64; FEATURES.len()];

        for (slot, spec) in values.iter_mut().zip(FEATURES.iter()) {
            let raw = form.get(spec.key);
            *slot = raw.and_then(parse_number).ok_or_else(|| FormError::InvalidNumber {
                key: spec.key,
                label: spec.label,
                found: describe(raw),
            })?;
        }

        let [pregnancies, glucose, blood_pressure, skin_thickness, insulin, bmi, diabetes_pedigree_function, age] =
            values;

        Ok(Self {
            pregnancies,
            glucose,
            blood_pressure,
            skin_thickness,
            insulin,
            bmi,
            diabetes_pedigree_function,
            age,
        })
    }

    pub fn to_patient_metrics(&self) -> PatientMetrics {
        PatientMetrics {
            glucose: self.glucose,
            blood_pressure: self.blood_pressure,
            bmi: self.bmi,
            age: self.age,
            insulin: self.insulin,
            pregnancies: Some(self.pregnancies),
            skin_thickness: Some(self.skin_thickness),
            diabetes_pedigree: Some(self.diabetes_pedigree_function),
        }
    }
}

/// Range violation messages, sorted for stable output
pub fn range_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .collect();
    messages.sort();
    messages
}

fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Offending value as echoed in the error; absent keys read `undefined`
fn describe(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
