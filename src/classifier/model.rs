// src/classifier/model.rs
// Weight-table complexity model loaded once at process startup

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

fn default_max_tokens() -> usize {
    128
}

/// Linear bag-of-words complexity scorer.
///
/// Loaded from a JSON artifact of the shape
/// `{"weights": {"token": 0.4, ...}, "bias": -1.2, "max_tokens": 128}`.
/// Scoring is deterministic: for a fixed artifact and fixed input text,
/// `predict` always returns the same verdict. The struct is immutable after
/// loading, so concurrent inference needs no locking.
#[derive(Debug, Clone, Deserialize)]
pub struct ComplexityModel {
    weights: HashMap<String, f32>,
    bias: f32,
    /// Inputs are truncated to this many tokens before scoring
    #[serde(default = "default_max_tokens")]
    max_tokens: usize,
}

impl ComplexityModel {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading classifier artifact {}", path.display()))?;
        let model: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing classifier artifact {}", path.display()))?;
        Ok(model)
    }

    /// Returns true when the text scores as complex (label 1),
    /// false when it scores as simple (label 0).
    pub fn predict(&self, text: &str) -> bool {
        let score: f32 = tokenize(text)
            .take(self.max_tokens)
            .map(|token| self.weights.get(&token).copied().unwrap_or(0.0))
            .sum::<f32>()
            + self.bias;
        score > 0.0
    }
}

/// Lowercased alphanumeric word tokens, in input order.
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn model(weights: serde_json::Value, bias: f32) -> ComplexityModel {
        serde_json::from_value(json!({ "weights": weights, "bias": bias }))
            .expect("valid model json")
    }

    #[test]
    fn loads_artifact_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"weights": {{"notwithstanding": 2.0}}, "bias": -1.0}}"#
        )
        .unwrap();

        let model = ComplexityModel::load(file.path()).unwrap();
        assert!(model.predict("notwithstanding the rain"));
        assert!(!model.predict("hello there"));
    }

    #[test]
    fn missing_artifact_is_an_error() {
        assert!(ComplexityModel::load("/nonexistent/weights.json").is_err());
    }

    #[test]
    fn prediction_is_deterministic() {
        let m = model(json!({"heretofore": 1.5, "cat": -0.2}), -1.0);
        let text = "Heretofore the cat sat on the mat.";
        let first = m.predict(text);
        for _ in 0..10 {
            assert_eq!(m.predict(text), first);
        }
    }

    #[test]
    fn tokenization_strips_punctuation_and_case() {
        let m = model(json!({"notwithstanding": 2.0}), -1.0);
        assert!(m.predict("Notwithstanding, we proceed."));
    }

    #[test]
    fn input_is_truncated_at_max_tokens() {
        let m = model(json!({"jargon": 10.0}), -1.0);
        // Heavy-weight token sits past the 128-token cutoff, so it is never scored.
        let mut words = vec!["the"; 128];
        words.push("jargon");
        assert!(!m.predict(&words.join(" ")));
    }
}
