use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures surfaced to HTTP clients as `{"message": ...}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Portfolio not found")]
    NotFound,

    #[error("Invalid portfolio data")]
    InvalidPortfolio,

    #[error("Name, email, and message are required")]
    MissingContactFields,

    #[error("Malformed payload")]
    MalformedPayload,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidPortfolio
            | ApiError::MissingContactFields
            | ApiError::MalformedPayload => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "message": self.to_string() }))).into_response()
    }
}
