use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Envelope shared by every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Maps a usecase failure onto the envelope. Server faults stay generic on
/// the wire; their detail lives in the logs.
pub fn from_error(status: StatusCode, message: String) -> Response {
    let message = if status.is_server_error() {
        "Internal server error".to_string()
    } else {
        message
    };

    (status, Json(ErrorResponse::new(message))).into_response()
}
