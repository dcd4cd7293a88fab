use axum::{http::StatusCode, Json};

use crate::modules::common::schema::ErrorResponse;

/// Catch-all for `/api/*` so unknown API paths never fall through to the UI.
pub async fn api_not_found() -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}
