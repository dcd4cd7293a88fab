use axum::{routing::any, Router};

use crate::modules::common::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api", any(controller::api_not_found))
        .route("/api/", any(controller::api_not_found))
        .route("/api/{*rest}", any(controller::api_not_found))
}
