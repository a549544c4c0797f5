//! Risk Scoring Types
//!
//! Input and output types for the scorer.
//! No logic beyond small presentation helpers.

use serde::{Deserialize, Serialize};

// ============================================================================
// PATIENT METRICS (input)
// ============================================================================

/// Patient health metrics as entered on the form
///
/// All values are expected to be finite. Domain ranges are NOT checked here;
/// the form layer does that before anything reaches the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientMetrics {
    /// Plasma glucose concentration
    pub glucose: f64,
    /// Blood pressure (unit not specified by the form)
    pub blood_pressure: f64,
    /// Body mass index
    pub bmi: f64,
    /// Age in years
    pub age: f64,
    /// Serum insulin level
    pub insulin: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pregnancies: Option<f64>,
    /// Triceps skin fold thickness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_thickness: Option<f64>,
    /// Diabetes pedigree function value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diabetes_pedigree: Option<f64>,
}

// ============================================================================
// PREDICTION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prediction {
    Diabetic,
    #[serde(rename = "Non-Diabetic")]
    NonDiabetic,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Diabetic => "Diabetic",
            Prediction::NonDiabetic => "Non-Diabetic",
        }
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK LEVEL
// ============================================================================

/// Coarse bucketing of the confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    /// Badge text shown next to the result
    pub fn badge(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::High => "High Risk",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "#4caf50",      // Green
            RiskLevel::Moderate => "#ff9800", // Orange
            RiskLevel::High => "#f44336",     // Red
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK ASSESSMENT (output)
// ============================================================================

/// Result of heuristic risk scoring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub prediction: Prediction,
    /// Capped risk points, 0-100
    pub confidence_score: u32,
    pub risk_level: RiskLevel,
    /// Contributing factors in fixed check order
    pub risk_factors: Vec<String>,
}
