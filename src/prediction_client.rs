//! Prediction API Client
//!
//! HTTP client for the remote diabetes prediction service.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::models::{FeatureVector, HealthStatus, ModelPrediction};

/// Prediction service configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8000/api`
    pub base_url: String,
    pub timeout_seconds: u64,
}

/// Failure talking to the prediction service
///
/// Display strings are the user-facing messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// Request was sent (or attempted) but nothing came back
    #[error("No response from server. The backend might be down or unreachable.")]
    NoResponse(String),

    /// Service answered outside the 2xx range
    #[error("Prediction API Error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Request could not be built
    #[error("An error occurred: {0}")]
    Request(String),

    /// 2xx answer with an unexpected body
    #[error("Received an unexpected response from the prediction API.")]
    Parse(String),
}

impl PredictionError {
    /// Underlying cause, for logs
    pub fn details(&self) -> String {
        match self {
            Self::NoResponse(e) | Self::Request(e) | Self::Parse(e) => e.clone(),
            Self::Server { status, message } => format!("{}: {}", status, message),
        }
    }
}

impl From<reqwest::Error> for PredictionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request(err.to_string())
        } else {
            Self::NoResponse(err.to_string())
        }
    }
}

/// Prediction API client
#[derive(Debug, Clone)]
pub struct PredictionClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl PredictionClient {
    /// Create new prediction client
    pub fn new(config: ClientConfig) -> Result<Self, PredictionError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| PredictionError::Request(e.to_string()))?;

        Ok(Self { config, http_client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Check service health
    ///
    /// An unhealthy service usually answers 503 with a status body, so the
    /// body is read regardless of the status code.
    pub async fn health_check(&self) -> Result<HealthStatus, PredictionError> {
        let url = self.url("health");
        tracing::debug!("Checking prediction API health at {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<HealthStatus>(&body) {
            Ok(health) => Ok(health),
            Err(e) if status.is_success() => Err(PredictionError::Parse(e.to_string())),
            Err(_) => Err(PredictionError::Server {
                status: status.as_u16(),
                message: error_message(&body),
            }),
        }
    }

    /// Submit features for a model prediction
    pub async fn predict(&self, features: &FeatureVector) -> Result<ModelPrediction, PredictionError> {
        let url = self.url("predict");
        tracing::debug!("Submitting payload to {}: {:?}", url, features);

        let response = self.http_client.post(&url).json(features).send().await?;
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            let prediction: ModelPrediction = serde_json::from_str(&body)
                .map_err(|e| PredictionError::Parse(e.to_string()))?;
            tracing::info!(
                "Prediction received: class={}, p(diabetes)={:.3}",
                prediction.prediction,
                prediction.probability_diabetes
            );
            Ok(prediction)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            tracing::error!("Prediction failed ({}): {}", status.as_u16(), message);
            Err(PredictionError::Server { status: status.as_u16(), message })
        }
    }
}

/// Pull a human message out of an error body (`description`, then `error`)
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["description", "error"]
                .iter()
                .find_map(|key| v.get(*key).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| "Unknown server error".to_string())
}
