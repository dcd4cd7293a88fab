use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use validator::{Validate, ValidationErrors};

use crate::modules::common::schema::ErrorResponse;
use crate::modules::ideas::schema::{GenerateRequest, GenerateResponse};
use crate::AppState;

/// Well-formed JSON with a wrongly typed field is reported like a missing topic.
fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(_) => "Missing prompt".to_string(),
        other => other.body_text(),
    }
}

fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(rejection_message(&rejection))),
        )
    })?;
    let payload = payload.normalized();

    if let Err(e) = payload.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(validation_message(&e))),
        ));
    }

    let mode = payload.mode();
    let topic = payload.prompt.unwrap_or_default();

    let result = state.pipeline.generate(&topic, mode).await;
    tracing::debug!(mode = mode.as_str(), source = ?result.source, "Generated ideas");

    Ok(Json(GenerateResponse { ideas: result.ideas }))
}
