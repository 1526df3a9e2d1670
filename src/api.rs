use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::analyzer::AdRequest;
use crate::error::ValidationError;
use crate::image::ImageSignals;

/// Wire shape of `POST /analyzeAd`. `imgSignals` stays untyped so a
/// malformed signal object never rejects the request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAnalyzeRequest {
    pub ad_text: Option<String>,
    pub goal: Option<String>,
    pub img_signals: Option<Value>,
}

impl ApiAnalyzeRequest {
    pub fn into_request(self) -> Result<AdRequest, ValidationError> {
        let signals = self
            .img_signals
            .as_ref()
            .and_then(ImageSignals::from_value);
        AdRequest::new(self.ad_text, self.goal, signals)
    }
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct ApiStatus {
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError(pub ValidationError);

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
