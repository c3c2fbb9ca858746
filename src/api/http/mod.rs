// src/api/http/mod.rs

pub mod health;
pub mod process;

pub use health::health_check;
pub use process::process_text;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::state::AppState;

pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/process_text", post(process_text))
        .route("/health", get(health_check))
}
