// src/pipeline/mod.rs
// Request orchestration: validate -> classify -> simplify -> package audio

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::state::AppState;

/// Inbound request body for `POST /process_text`.
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    #[serde(default)]
    pub text: String,
    /// Accepted for backward compatibility with older clients; unused.
    #[serde(default)]
    pub prompt_for_llm: Option<String>,
}

/// Outbound response body for `POST /process_text`.
#[derive(Debug, Serialize)]
pub struct ResponsePayload {
    #[serde(rename = "complexityMessage")]
    pub complexity_message: String,
    #[serde(rename = "simplifiedText")]
    pub simplified_text: String,
    #[serde(rename = "audioUrl")]
    pub audio_url: Option<String>,
}

/// The only failure the orchestrator itself can produce. Classification,
/// simplification, and synthesis each own a fallback and never abort a
/// request.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(String),
}

/// Run one request through the pipeline.
///
/// The simplification step runs for simple text as well: the upstream
/// service may still normalise formatting, and the verdict only selects the
/// status message. Intentional, do not short-circuit on a simple verdict.
pub async fn run(state: &AppState, request: TextRequest) -> Result<ResponsePayload, PipelineError> {
    if request.text.trim().is_empty() {
        return Err(PipelineError::Validation(
            "No text provided for analysis.".to_string(),
        ));
    }
    let text = request.text;

    let verdict = state.classifier.predict(&text);
    if verdict.degraded {
        debug!("complexity verdict produced by heuristic fallback");
    }
    let complexity_message = if verdict.is_complex {
        "Text analyzed as complex. Simplifying...".to_string()
    } else {
        "Text analyzed as simple.".to_string()
    };

    let simplified_text = state.simplifier.simplify(&text).await;

    let audio_url = state
        .synthesizer
        .synthesize(&simplified_text)
        .await
        .map(|artifact| artifact.data_url());

    Ok(ResponsePayload {
        complexity_message,
        simplified_text,
        audio_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::PlaceholderSynthesizer;
    use crate::classifier::ClassifierGate;
    use crate::simplify::{RuleSimplifier, Simplifier, SimplifierClient, SimplifyError};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct UnreachableSimplifier;

    #[async_trait]
    impl Simplifier for UnreachableSimplifier {
        async fn simplify(&self, _text: &str) -> Result<String, SimplifyError> {
            Err(SimplifyError::Timeout)
        }

        fn backend_name(&self) -> &'static str {
            "unreachable"
        }
    }

    fn state_with(simplifier: Arc<dyn Simplifier>, audio: bool) -> AppState {
        AppState {
            classifier: Arc::new(ClassifierGate::degraded()),
            simplifier: SimplifierClient::new(simplifier),
            synthesizer: Arc::new(PlaceholderSynthesizer::new(audio)),
        }
    }

    fn request(text: &str) -> TextRequest {
        TextRequest {
            text: text.to_string(),
            prompt_for_llm: None,
        }
    }

    #[tokio::test]
    async fn empty_text_is_rejected_before_any_step() {
        let state = state_with(Arc::new(RuleSimplifier::new()), false);
        assert!(run(&state, request("")).await.is_err());
        assert!(run(&state, request("   \n\t")).await.is_err());
    }

    #[tokio::test]
    async fn short_text_reports_simple_and_still_simplifies() {
        let state = state_with(Arc::new(RuleSimplifier::new()), false);
        let out = run(&state, request("Please utilize the door."))
            .await
            .unwrap();
        assert!(out.complexity_message.contains("simple"));
        // Simplification ran despite the simple verdict
        assert_eq!(out.simplified_text, "Please use the door.");
    }

    #[tokio::test]
    async fn long_text_reports_complex() {
        let state = state_with(Arc::new(RuleSimplifier::new()), false);
        let text = vec!["filler"; 25].join(" ");
        let out = run(&state, request(&text)).await.unwrap();
        assert!(out.complexity_message.contains("complex"));
    }

    #[tokio::test]
    async fn unreachable_simplifier_fails_open() {
        let state = state_with(Arc::new(UnreachableSimplifier), false);
        let text = vec!["word"; 25].join(" ");
        let out = run(&state, request(&text)).await.unwrap();
        assert_eq!(out.simplified_text, text);
        assert!(!out.simplified_text.is_empty());
    }

    #[tokio::test]
    async fn audio_url_present_only_when_enabled() {
        let with_audio = state_with(Arc::new(RuleSimplifier::new()), true);
        let out = run(&with_audio, request("The cat sat.")).await.unwrap();
        let url = out.audio_url.expect("audio enabled");
        assert!(url.starts_with("data:audio/mp3;base64,"));

        let without_audio = state_with(Arc::new(RuleSimplifier::new()), false);
        let out = run(&without_audio, request("The cat sat.")).await.unwrap();
        assert!(out.audio_url.is_none());
    }
}
