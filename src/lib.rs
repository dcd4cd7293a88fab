use std::any::Any;
use std::path::Path;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::modules::common::{controller::method_not_allowed, schema::ErrorResponse};
use crate::modules::ideas::pipeline::IdeaPipeline;

pub mod config;
pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<IdeaPipeline>,
}

impl AppState {
    pub fn new(pipeline: IdeaPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Failed to generate ideas")),
    )
        .into_response()
}

/// API routes only, without static files. Used directly by tests.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(modules::health::routes::routes())
        .merge(modules::ideas::routes::routes())
        .merge(modules::common::routes::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Full application: API, static UI with `index.html` fallback, CORS and tracing.
pub fn app(state: AppState, public_dir: &Path) -> Router {
    let ui = ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    api_router(state)
        .fallback_service(ui)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
