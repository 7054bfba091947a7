use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the detection endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input was empty or whitespace-only.
    #[error("Text cannot be empty")]
    EmptyText,

    /// The classifier could not determine a language.
    #[error("Error processing text: {0}")]
    Classification(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyText => StatusCode::BAD_REQUEST,
            ApiError::Classification(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
