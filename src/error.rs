use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            // VULNERABILITY (intentional): the raw underlying error text is
            // sent to the client unredacted. Students should replace this
            // with a generic message and log the detail server-side.
            AppError::UploadFailed(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Upload failed: {}", detail),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
