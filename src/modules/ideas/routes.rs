use axum::{routing::post, Router};

use crate::modules::ideas::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/generate", post(controller::generate))
}
