//! Risk Scoring Module
//!
//! Heuristic diabetes risk scoring over patient metrics.
//! Pure functions only - no I/O, no shared state.
//!
//! ## Structure
//! - `types`: PatientMetrics, RiskAssessment, Prediction, RiskLevel
//! - `rules`: Point weights and thresholds
//! - `scorer`: The additive scoring function
//! - `key_metrics`: Reference-range bars for the result chart
//!
//! ## Usage
//! ```ignore
//! use crate::scoring::{assess, PatientMetrics};
//!
//! let result = assess(&metrics);
//! println!("{} ({}%)", result.prediction, result.confidence_score);
//! ```

pub mod types;
pub mod rules;
pub mod scorer;
pub mod key_metrics;

pub use types::{
    PatientMetrics,
    Prediction,
    RiskAssessment,
    RiskLevel,
};

pub use scorer::{assess, raw_risk_score};

pub use key_metrics::{key_metrics, MetricBar};
