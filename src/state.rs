// src/state.rs
// Application state - built once at startup, read-only while serving

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::audio::{PlaceholderSynthesizer, SpeechSynthesizer};
use crate::classifier::ClassifierGate;
use crate::config::CONFIG;
use crate::simplify::SimplifierClient;

/// Application state shared across handlers.
///
/// Every field is immutable after construction, so concurrent requests read
/// it without locking.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<ClassifierGate>,
    pub simplifier: SimplifierClient,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let classifier = Arc::new(ClassifierGate::load(&CONFIG.classifier.model_path));

        let simplifier = SimplifierClient::from_config(&CONFIG.simplifier);
        info!("Simplifier backend: {}", simplifier.backend_name());

        let synthesizer: Arc<dyn SpeechSynthesizer> =
            Arc::new(PlaceholderSynthesizer::new(CONFIG.audio.enabled));
        info!(
            "Audio synthesis: {}",
            if CONFIG.audio.enabled {
                "enabled (placeholder)"
            } else {
                "disabled"
            }
        );

        Ok(Self {
            classifier,
            simplifier,
            synthesizer,
        })
    }
}
