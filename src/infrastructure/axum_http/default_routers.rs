use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::infrastructure::axum_http::error_responses::ErrorResponse;

pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, "OK").into_response()
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Resource not found")),
    )
        .into_response()
}
