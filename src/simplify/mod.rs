// src/simplify/mod.rs
// Simplifier client - fail-open wrapper around the rewriting backends

mod rules;
mod webhook;

pub use rules::RuleSimplifier;
pub use webhook::WebhookSimplifier;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::config::{SimplifierConfig, SimplifierMode};

/// Typed failure modes of a simplification call. Every variant is handled
/// fail-open by [`SimplifierClient`]; none of them ever reaches the caller.
#[derive(Error, Debug)]
pub enum SimplifyError {
    #[error("simplification request timed out")]
    Timeout,
    #[error("simplification request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("simplification service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("unexpected response from simplification service: {0}")]
    Malformed(String),
}

/// Rewriting backend. Implementations must be thread-safe (Send + Sync)
/// so production and mock variants are interchangeable behind an Arc.
#[async_trait]
pub trait Simplifier: Send + Sync {
    async fn simplify(&self, text: &str) -> Result<String, SimplifyError>;

    /// Short backend identifier for logs and health reporting.
    fn backend_name(&self) -> &'static str;
}

/// Client in front of the configured [`Simplifier`] backend.
///
/// Owns the fail-open policy: any backend failure is logged and the original
/// text passes through unchanged. Worst case is a no-op, never an error.
#[derive(Clone)]
pub struct SimplifierClient {
    inner: Arc<dyn Simplifier>,
}

impl SimplifierClient {
    pub fn new(inner: Arc<dyn Simplifier>) -> Self {
        Self { inner }
    }

    pub fn from_config(config: &SimplifierConfig) -> Self {
        let inner: Arc<dyn Simplifier> = match config.mode {
            SimplifierMode::Webhook => Arc::new(WebhookSimplifier::new(
                config.webhook_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )),
            SimplifierMode::Rules => Arc::new(RuleSimplifier::new()),
        };
        Self::new(inner)
    }

    pub fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    /// Simplify `text`, falling back to the original on any failure.
    /// An empty rewrite also falls back, so non-empty input always yields
    /// non-empty output.
    pub async fn simplify(&self, text: &str) -> String {
        match self.inner.simplify(text).await {
            Ok(rewritten) if !rewritten.trim().is_empty() => rewritten,
            Ok(_) => {
                warn!("Simplification service returned empty text; keeping original");
                text.to_string()
            }
            Err(e) => {
                warn!("Error contacting simplification service: {e}; returning original text");
                text.to_string()
            }
        }
    }
}
