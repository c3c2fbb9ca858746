// src/classifier/mod.rs
// Classifier gate - wraps the complexity model with a heuristic fallback

mod model;

pub use model::ComplexityModel;

use tracing::{info, warn};

/// Word-count cutoff used when no model is loaded: longer than this is complex.
const HEURISTIC_WORD_LIMIT: usize = 20;

/// Complexity verdict for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_complex: bool,
    /// True when the verdict came from the heuristic fallback rather than
    /// the loaded model. Observability only; callers never see an error.
    pub degraded: bool,
}

/// Gate in front of the complexity model.
///
/// Built once at startup. If the model artifact cannot be loaded the gate
/// degrades to a word-count heuristic instead of failing, and keeps serving.
pub struct ClassifierGate {
    model: Option<ComplexityModel>,
}

impl ClassifierGate {
    /// Load the model artifact, degrading to the heuristic if it is missing
    /// or unparsable. Never fails.
    pub fn load(path: &str) -> Self {
        match ComplexityModel::load(path) {
            Ok(model) => {
                info!("Complexity model loaded from {}", path);
                Self { model: Some(model) }
            }
            Err(e) => {
                warn!(
                    "Complexity model unavailable ({e:#}); using word-count heuristic"
                );
                Self { model: None }
            }
        }
    }

    pub fn with_model(model: ComplexityModel) -> Self {
        Self { model: Some(model) }
    }

    /// Gate with no model, always answering from the heuristic.
    pub fn degraded() -> Self {
        Self { model: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.model.is_none()
    }

    pub fn predict(&self, text: &str) -> Verdict {
        match &self.model {
            Some(model) => Verdict {
                is_complex: model.predict(text),
                degraded: false,
            },
            None => Verdict {
                is_complex: text.split_whitespace().count() > HEURISTIC_WORD_LIMIT,
                degraded: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn heuristic_boundary_at_twenty_words() {
        let gate = ClassifierGate::degraded();

        let twenty = vec!["word"; 20].join(" ");
        let verdict = gate.predict(&twenty);
        assert!(!verdict.is_complex);
        assert!(verdict.degraded);

        let twenty_one = vec!["word"; 21].join(" ");
        let verdict = gate.predict(&twenty_one);
        assert!(verdict.is_complex);
        assert!(verdict.degraded);
    }

    #[test]
    fn short_sentence_is_simple_under_heuristic() {
        let gate = ClassifierGate::degraded();
        assert!(!gate.predict("The cat sat.").is_complex);
    }

    #[test]
    fn model_verdict_is_not_flagged_degraded() {
        let model: ComplexityModel =
            serde_json::from_value(json!({"weights": {"ubiquitous": 3.0}, "bias": -1.0}))
                .unwrap();
        let gate = ClassifierGate::with_model(model);

        let verdict = gate.predict("Such jargon is ubiquitous here.");
        assert!(verdict.is_complex);
        assert!(!verdict.degraded);
        assert!(!gate.is_degraded());
    }

    #[test]
    fn verdict_is_deterministic_per_gate() {
        let gate = ClassifierGate::degraded();
        let text = vec!["filler"; 25].join(" ");
        let first = gate.predict(&text);
        for _ in 0..5 {
            assert_eq!(gate.predict(&text), first);
        }
    }
}
