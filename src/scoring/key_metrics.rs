//! Key metric bars for the result chart
//!
//! Expresses glucose, blood pressure and BMI as a percentage of the
//! upper bound of their normal reference range.

use serde::Serialize;

use super::types::PatientMetrics;

struct ReferenceRange {
    name: &'static str,
    unit: &'static str,
    /// Values at or above this are flagged as elevated
    high: f64,
}

const GLUCOSE_RANGE: ReferenceRange = ReferenceRange { name: "Glucose", unit: "mg/dL", high: 100.0 };
const BLOOD_PRESSURE_RANGE: ReferenceRange = ReferenceRange { name: "Blood Pressure", unit: "mmHg", high: 120.0 };
const BMI_RANGE: ReferenceRange = ReferenceRange { name: "BMI", unit: "kg/m²", high: 25.0 };

/// One bar of the key metrics chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricBar {
    pub name: &'static str,
    /// Percent of the reference high, clamped to 0-100
    pub value: f64,
    pub actual: f64,
    pub unit: &'static str,
    pub elevated: bool,
}

impl MetricBar {
    fn new(range: &ReferenceRange, actual: f64) -> Self {
        Self {
            name: range.name,
            value: (actual / range.high * 100.0).clamp(0.0, 100.0),
            actual,
            unit: range.unit,
            elevated: actual >= range.high,
        }
    }
}

pub fn key_metrics(metrics: &PatientMetrics) -> Vec<MetricBar> {
    vec![
        MetricBar::new(&GLUCOSE_RANGE, metrics.glucose),
        MetricBar::new(&BLOOD_PRESSURE_RANGE, metrics.blood_pressure),
        MetricBar::new(&BMI_RANGE, metrics.bmi),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(glucose: f64, blood_pressure: f64, bmi: f64) -> PatientMetrics {
        PatientMetrics {
            glucose,
            blood_pressure,
            bmi,
            age: 30.0,
            insulin: 80.0,
            pregnancies: None,
            skin_thickness: None,
            diabetes_pedigree: None,
        }
    }

    #[test]
    fn test_percent_of_range() {
        let bars = key_metrics(&metrics(50.0, 60.0, 20.0));
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].name, "Glucose");
        assert_eq!(bars[0].value, 50.0);
        assert_eq!(bars[1].value, 50.0);
        assert!((bars[2].value - 80.0).abs() < 1e-9);
        assert!(bars.iter().all(|b| !b.elevated));
    }

    #[test]
    fn test_elevated_at_reference_high() {
        // Chart flags at >= high, unlike the scorer's strict > checks
        let bars = key_metrics(&metrics(100.0, 120.0, 25.0));
        assert!(bars.iter().all(|b| b.elevated));
        assert!(bars.iter().all(|b| b.value == 100.0));
    }

    #[test]
    fn test_value_is_clamped() {
        let bars = key_metrics(&metrics(300.0, -20.0, 40.0));
        assert_eq!(bars[0].value, 100.0);
        assert_eq!(bars[0].actual, 300.0);
        assert_eq!(bars[1].value, 0.0);
        assert!(!bars[1].elevated);
    }
}
