// src/api/http/health.rs
//
// Health endpoint. Degraded paths keep the service serving, so this always
// answers 200 and reports which backends are active in the body.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    classifier: &'static str,
    simplifier: &'static str,
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        classifier: if state.classifier.is_degraded() {
            "heuristic"
        } else {
            "model"
        },
        simplifier: state.simplifier.backend_name(),
    })
}
