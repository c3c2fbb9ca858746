// src/api/http/process.rs
// POST /process_text - the single text-processing endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::pipeline::{self, PipelineError, ResponsePayload, TextRequest};
use crate::state::AppState;

pub async fn process_text(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> Result<Json<ResponsePayload>, ApiError> {
    // A missing or unparsable body gets the same 400 shape as empty text
    let Json(request) = payload
        .map_err(|_| ApiError::Validation("Invalid or missing JSON payload.".to_string()))?;

    let request_id = Uuid::new_v4();
    info!(%request_id, chars = request.text.len(), "processing text submission");

    let response = pipeline::run(&state, request).await.map_err(|e| match e {
        PipelineError::Validation(msg) => ApiError::Validation(msg),
    })?;

    info!(
        %request_id,
        audio = response.audio_url.is_some(),
        "request complete"
    );
    Ok(Json(response))
}

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        error!("Request rejected: {}", message);

        (
            status,
            Json(serde_json::json!({
                "error": message
            })),
        )
            .into_response()
    }
}
