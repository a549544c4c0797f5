//! Risk Scoring Rules & Thresholds
//!
//! Calibration constants for the heuristic scorer.
//! No scoring logic here - constants only.

// ============================================================================
// GLUCOSE
// ============================================================================

pub const GLUCOSE_HIGH: f64 = 140.0;
pub const GLUCOSE_ELEVATED: f64 = 100.0;
pub const GLUCOSE_HIGH_POINTS: u32 = 30;
pub const GLUCOSE_ELEVATED_POINTS: u32 = 15;

// ============================================================================
// BMI
// ============================================================================

pub const BMI_OBESE: f64 = 30.0;
pub const BMI_OVERWEIGHT: f64 = 25.0;
pub const BMI_OBESE_POINTS: u32 = 20;
pub const BMI_OVERWEIGHT_POINTS: u32 = 10;

// ============================================================================
// AGE
// ============================================================================

pub const AGE_SENIOR: f64 = 50.0;
pub const AGE_MIDDLE: f64 = 40.0;
pub const AGE_ADULT: f64 = 30.0;
pub const AGE_SENIOR_POINTS: u32 = 15;
pub const AGE_MIDDLE_POINTS: u32 = 10;
pub const AGE_ADULT_POINTS: u32 = 5;

// ============================================================================
// BLOOD PRESSURE
// ============================================================================

/// Opaque calibration constants - the unit (systolic vs diastolic) is not specified
pub const BLOOD_PRESSURE_HIGH: f64 = 140.0;
pub const BLOOD_PRESSURE_ELEVATED: f64 = 120.0;
pub const BLOOD_PRESSURE_HIGH_POINTS: u32 = 15;
pub const BLOOD_PRESSURE_ELEVATED_POINTS: u32 = 10;

// ============================================================================
// INSULIN
// ============================================================================

pub const INSULIN_HIGH: f64 = 180.0;
pub const INSULIN_ELEVATED: f64 = 150.0;
pub const INSULIN_HIGH_POINTS: u32 = 15;
pub const INSULIN_ELEVATED_POINTS: u32 = 10;

// ============================================================================
// DIABETES PEDIGREE
// ============================================================================

pub const PEDIGREE_HIGH: f64 = 1.0;
pub const PEDIGREE_ELEVATED: f64 = 0.5;
pub const PEDIGREE_HIGH_POINTS: u32 = 15;
pub const PEDIGREE_ELEVATED_POINTS: u32 = 10;

// ============================================================================
// OUTCOME THRESHOLDS (applied to the capped confidence score)
// ============================================================================

/// Confidence score ceiling
pub const MAX_CONFIDENCE: u32 = 100;

/// At or above this score = Diabetic
pub const DIABETIC_THRESHOLD: u32 = 50;

/// At or above this score = High risk
pub const HIGH_RISK_THRESHOLD: u32 = 70;

/// At or above this score = Moderate risk (if not High)
pub const MODERATE_RISK_THRESHOLD: u32 = 40;

// ============================================================================
// RISK FACTOR CHECKS
// ============================================================================
// Informational thresholds. Glucose and BMI intentionally use the lower
// scoring cut-off, so a factor can be reported with fewer points attached.

pub const FACTOR_GLUCOSE: f64 = 100.0;
pub const FACTOR_BMI: f64 = 25.0;
pub const FACTOR_BLOOD_PRESSURE: f64 = 120.0;
pub const FACTOR_AGE: f64 = 40.0;
pub const FACTOR_INSULIN: f64 = 150.0;
pub const FACTOR_PEDIGREE: f64 = 0.5;

pub const ELEVATED_GLUCOSE: &str = "Elevated glucose levels";
pub const ELEVATED_BMI: &str = "Elevated BMI";
pub const ELEVATED_BLOOD_PRESSURE: &str = "Elevated blood pressure";
pub const AGE_FACTOR: &str = "Age factor";
pub const INSULIN_RESISTANCE: &str = "Insulin resistance";
pub const FAMILY_HISTORY: &str = "Family history of diabetes";
