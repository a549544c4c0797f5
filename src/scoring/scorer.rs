//! Risk Scorer
//!
//! Fixed-weight additive scoring. Deterministic and explainable:
//! every point comes from a named threshold in `rules`.
//! Input: PatientMetrics
//! Output: RiskAssessment

use super::rules::*;
use super::types::{PatientMetrics, Prediction, RiskAssessment, RiskLevel};

// ============================================================================
// MAIN SCORING FUNCTION
// ============================================================================

/// Assess diabetes risk for one set of metrics
///
/// Total over any finite input, including negative values.
pub fn assess(metrics: &PatientMetrics) -> RiskAssessment {
    let confidence_score = raw_risk_score(metrics).min(MAX_CONFIDENCE);

    RiskAssessment {
        prediction: prediction_for(confidence_score),
        confidence_score,
        risk_level: risk_level_for(confidence_score),
        risk_factors: risk_factors(metrics),
    }
}

/// Uncapped sum of risk points
pub fn raw_risk_score(metrics: &PatientMetrics) -> u32 {
    glucose_points(metrics.glucose)
        + bmi_points(metrics.bmi)
        + age_points(metrics.age)
        + blood_pressure_points(metrics.blood_pressure)
        + insulin_points(metrics.insulin)
        + metrics.diabetes_pedigree.map_or(0, pedigree_points)
}

pub fn prediction_for(confidence_score: u32) -> Prediction {
    if confidence_score >= DIABETIC_THRESHOLD {
        Prediction::Diabetic
    } else {
        Prediction::NonDiabetic
    }
}

/// High is checked before Moderate
pub fn risk_level_for(confidence_score: u32) -> RiskLevel {
    if confidence_score >= HIGH_RISK_THRESHOLD {
        RiskLevel::High
    } else if confidence_score >= MODERATE_RISK_THRESHOLD {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

// ============================================================================
// PER-METRIC POINTS
// ============================================================================

fn glucose_points(glucose: f64) -> u32 {
    if glucose > GLUCOSE_HIGH {
        GLUCOSE_HIGH_POINTS
    } else if glucose > GLUCOSE_ELEVATED {
        GLUCOSE_ELEVATED_POINTS
    } else {
        0
    }
}

fn bmi_points(bmi: f64) -> u32 {
    if bmi > BMI_OBESE {
        BMI_OBESE_POINTS
    } else if bmi > BMI_OVERWEIGHT {
        BMI_OVERWEIGHT_POINTS
    } else {
        0
    }
}

fn age_points(age: f64) -> u32 {
    if age > AGE_SENIOR {
        AGE_SENIOR_POINTS
    } else if age > AGE_MIDDLE {
        AGE_MIDDLE_POINTS
    } else if age > AGE_ADULT {
        AGE_ADULT_POINTS
    } else {
        0
    }
}

fn blood_pressure_points(blood_pressure: f64) -> u32 {
    if blood_pressure > BLOOD_PRESSURE_HIGH {
        BLOOD_PRESSURE_HIGH_POINTS
    } else if blood_pressure > BLOOD_PRESSURE_ELEVATED {
        BLOOD_PRESSURE_ELEVATED_POINTS
    } else {
        0
    }
}

fn insulin_points(insulin: f64) -> u32 {
    if insulin > INSULIN_HIGH {
        INSULIN_HIGH_POINTS
    } else if insulin > INSULIN_ELEVATED {
        INSULIN_ELEVATED_POINTS
    } else {
        0
    }
}

fn pedigree_points(pedigree: f64) -> u32 {
    if pedigree > PEDIGREE_HIGH {
        PEDIGREE_HIGH_POINTS
    } else if pedigree > PEDIGREE_ELEVATED {
        PEDIGREE_ELEVATED_POINTS
    } else {
        0
    }
}

// ============================================================================
// RISK FACTORS
// ============================================================================

/// Informational checks, independent of the scoring branches
fn risk_factors(metrics: &PatientMetrics) -> Vec<String> {
    let checks = [
        (metrics.glucose > FACTOR_GLUCOSE, ELEVATED_GLUCOSE),
        (metrics.bmi > FACTOR_BMI, ELEVATED_BMI),
        (metrics.blood_pressure > FACTOR_BLOOD_PRESSURE, ELEVATED_BLOOD_PRESSURE),
        (metrics.age > FACTOR_AGE, AGE_FACTOR),
        (metrics.insulin > FACTOR_INSULIN, INSULIN_RESISTANCE),
        (
            metrics.diabetes_pedigree.is_some_and(|p| p > FACTOR_PEDIGREE),
            FAMILY_HISTORY,
        ),
    ];

    checks
        .into_iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, factor)| factor.to_string())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
