//! Prediction service models

use serde::{Deserialize, Serialize};

use crate::scoring::{MetricBar, RiskAssessment};

/// Response of the remote prediction service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPrediction {
    /// 1 = diabetic, 0 = not diabetic
    pub prediction: u8,
    pub probability_diabetes: f64,
    pub probability_no_diabetes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_info: Option<String>,
}

impl ModelPrediction {
    pub fn is_diabetic(&self) -> bool {
        self.prediction == 1
    }
}

/// Health status reported by the remote prediction service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    /// Message to show next to the status, with defaults when the service sent none
    pub fn display_message(&self) -> String {
        match (&self.message, self.is_healthy()) {
            (Some(msg), _) => msg.clone(),
            (None, true) => "API is healthy.".to_string(),
            (None, false) => "Unknown API issue.".to_string(),
        }
    }
}

/// Body of `/api/assess`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessResponse {
    pub assessment: RiskAssessment,
    pub key_metrics: Vec<MetricBar>,
}

/// Body of `/api/predict`: model output next to the local heuristic
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub model: ModelPrediction,
    pub assessment: RiskAssessment,
    pub key_metrics: Vec<MetricBar>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_prediction_without_info() {
        let body = r#"{"prediction": 1, "probability_diabetes": 0.74, "probability_no_diabetes": 0.26}"#;
        let parsed: ModelPrediction = serde_json::from_str(body).unwrap();
        assert!(parsed.is_diabetic());
        assert_eq!(parsed.model_info, None);
    }

    #[test]
    fn test_health_message_defaults() {
        let healthy = HealthStatus { status: "healthy".into(), message: None };
        assert!(healthy.is_healthy());
        assert_eq!(healthy.display_message(), "API is healthy.");

        let degraded = HealthStatus { status: "unhealthy".into(), message: None };
        assert!(!degraded.is_healthy());
        assert_eq!(degraded.display_message(), "Unknown API issue.");

        let explained = HealthStatus {
            status: "unhealthy".into(),
            message: Some("ML components failed to load.".into()),
        };
        assert_eq!(explained.display_message(), "ML components failed to load.");
    }
}
