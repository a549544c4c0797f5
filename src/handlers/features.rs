//! Form feature handlers

use axum::Json;

use crate::models::{FeatureSpec, FEATURES};

/// Field table (labels, ranges, defaults) for building the form
pub async fn list() -> Json<Vec<FeatureSpec>> {
    Json(FEATURES.to_vec())
}
