//! Error handling

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::{range_messages, FormError};
use crate::prediction_client::PredictionError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Validation errors
    #[error("{0}")]
    ValidationError(String),

    // Prediction service errors
    #[error(transparent)]
    Prediction(#[from] PredictionError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Prediction(PredictionError::NoResponse(_)) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Prediction(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::Prediction(err) => {
                tracing::error!("Prediction service error: {}", err.details());
                err.to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// `Json` extractor whose rejections come back as `AppError` bodies
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::ValidationError(range_messages(&errors).join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::ValidationError("bad".into()), StatusCode::BAD_REQUEST),
            (PredictionError::NoResponse("refused".into()).into(), StatusCode::SERVICE_UNAVAILABLE),
            (
                PredictionError::Server { status: 500, message: "boom".into() }.into(),
                StatusCode::BAD_GATEWAY,
            ),
            (PredictionError::Request("url".into()).into(), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status_code(), expected, "{:?}", err);
        }
    }

    #[tokio::test]
    async fn test_body_carries_user_message_only() {
        let err: AppError = PredictionError::NoResponse("tcp connect error: refused".into()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "No response from server. The backend might be down or unreachable.");
        assert_eq!(body["status"], 503);
    }
}
