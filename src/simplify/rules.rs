// src/simplify/rules.rs
// Local word-substitution backend, used offline and in tests

use async_trait::async_trait;

use super::{Simplifier, SimplifyError};

/// Formal-to-plain word substitutions, matched on the lowercased word core.
const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("additional", "more"),
    ("approximately", "about"),
    ("assistance", "help"),
    ("commence", "begin"),
    ("demonstrate", "show"),
    ("endeavor", "try"),
    ("facilitate", "help"),
    ("numerous", "many"),
    ("obtain", "get"),
    ("purchase", "buy"),
    ("require", "need"),
    ("subsequently", "later"),
    ("sufficient", "enough"),
    ("terminate", "end"),
    ("utilize", "use"),
];

/// Rewrites text with a static substitution table. No network, no failure
/// modes; exists so the pipeline can run without the external webhook.
pub struct RuleSimplifier;

impl RuleSimplifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleSimplifier {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(core: &str) -> Option<&'static str> {
    let lowered = core.to_lowercase();
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == lowered)
        .map(|(_, to)| *to)
}

/// Substitute one whitespace-delimited word, keeping surrounding punctuation
/// and leading capitalization.
fn simplify_word(word: &str) -> String {
    let start = word.find(|c: char| c.is_alphanumeric()).unwrap_or(word.len());
    let end = word
        .char_indices()
        .filter(|(_, c)| c.is_alphanumeric())
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(start);
    let (prefix, rest) = word.split_at(start);
    let (core, suffix) = rest.split_at(end - start);

    match lookup(core) {
        Some(replacement) => {
            let mut replaced = replacement.to_string();
            if core.chars().next().is_some_and(char::is_uppercase) {
                let mut chars = replaced.chars();
                if let Some(first) = chars.next() {
                    replaced = first.to_uppercase().collect::<String>() + chars.as_str();
                }
            }
            format!("{prefix}{replaced}{suffix}")
        }
        None => word.to_string(),
    }
}

#[async_trait]
impl Simplifier for RuleSimplifier {
    async fn simplify(&self, text: &str) -> Result<String, SimplifyError> {
        let rewritten = text
            .split_whitespace()
            .map(simplify_word)
            .collect::<Vec<_>>()
            .join(" ");
        Ok(rewritten)
    }

    fn backend_name(&self) -> &'static str {
        "rules"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn substitutes_formal_words() {
        let s = RuleSimplifier::new();
        let out = s
            .simplify("We utilize numerous tools to facilitate work.")
            .await
            .unwrap();
        assert_eq!(out, "We use many tools to help work.");
    }

    #[tokio::test]
    async fn keeps_punctuation_and_capitalization() {
        let s = RuleSimplifier::new();
        let out = s.simplify("Commence, then terminate!").await.unwrap();
        assert_eq!(out, "Begin, then end!");
    }

    #[tokio::test]
    async fn unknown_words_pass_through() {
        let s = RuleSimplifier::new();
        let out = s.simplify("The cat sat.").await.unwrap();
        assert_eq!(out, "The cat sat.");
    }
}
