use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::models::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("host metrics unavailable: {0}")]
    Metrics(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
