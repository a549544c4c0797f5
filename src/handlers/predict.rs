//! Prediction handler

use axum::{extract::State, Json};
use serde_json::{Map, Value};
use validator::Validate;

use crate::{AppResult, AppState};
use crate::error::AppJson;
use crate::models::{FeatureVector, PredictResponse};
use crate::scoring;

/// Validate the form, ask the prediction service, and attach the local heuristic
pub async fn predict(
    State(state): State<AppState>,
    AppJson(form): AppJson<Map<String, Value>>,
) -> AppResult<Json<PredictResponse>> {
    let features = FeatureVector::from_form(&form)?;
    features.validate()?;

    let model = state.client.predict(&features).await?;

    let metrics = features.to_patient_metrics();
    let assessment = scoring::assess(&metrics);

    tracing::info!(
        "Prediction complete: model={}, heuristic={} ({}%)",
        if model.is_diabetic() { "diabetic" } else { "non-diabetic" },
        assessment.prediction,
        assessment.confidence_score
    );

    Ok(Json(PredictResponse {
        model,
        assessment,
        key_metrics: scoring::key_metrics(&metrics),
    }))
}
