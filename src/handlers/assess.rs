//! Heuristic assessment handlers

use axum::{response::Html, Json};

use crate::error::AppJson;
use crate::models::AssessResponse;
use crate::report::render_report;
use crate::scoring::{self, PatientMetrics};

/// Score metrics locally, no prediction service involved
pub async fn assess(AppJson(metrics): AppJson<PatientMetrics>) -> Json<AssessResponse> {
    let assessment = scoring::assess(&metrics);
    tracing::debug!(
        "Assessed metrics: score={}, level={}",
        assessment.confidence_score,
        assessment.risk_level
    );

    Json(AssessResponse {
        assessment,
        key_metrics: scoring::key_metrics(&metrics),
    })
}

/// Printable HTML report for the given metrics
pub async fn report(AppJson(metrics): AppJson<PatientMetrics>) -> Html<String> {
    Html(render_report(&scoring::assess(&metrics)))
}
