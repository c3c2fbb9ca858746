// src/config/mod.rs
// Central configuration for the lucid backend

pub mod helpers;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref CONFIG: LucidConfig = LucidConfig::from_env();
}

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LucidConfig {
    pub server: ServerConfig,
    pub classifier: ClassifierConfig,
    pub simplifier: SimplifierConfig,
    pub audio: AudioConfig,
}

impl LucidConfig {
    pub fn from_env() -> Self {
        // Load .env file
        dotenv::dotenv().ok(); // Don't panic if .env doesn't exist (for production)

        Self {
            server: ServerConfig::from_env(),
            classifier: ClassifierConfig::from_env(),
            simplifier: SimplifierConfig::from_env(),
            audio: AudioConfig::from_env(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: helpers::env_or("LUCID_HOST", "0.0.0.0"),
            port: helpers::env_parsed("LUCID_PORT", 5000),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complexity classifier configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Path to the classifier weight artifact. A missing or unreadable
    /// artifact puts the gate into heuristic fallback mode at startup.
    pub model_path: String,
}

impl ClassifierConfig {
    pub fn from_env() -> Self {
        Self {
            model_path: helpers::env_or(
                "COMPLEXITY_MODEL_PATH",
                "./models/complexity_classifier.json",
            ),
        }
    }
}

/// Which simplification backend to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimplifierMode {
    /// External rewriting webhook (n8n-style workflow)
    Webhook,
    /// Local static word-substitution table
    Rules,
}

/// Simplification service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifierConfig {
    pub mode: SimplifierMode,
    pub webhook_url: String,
    /// Bounded wait for the webhook call, in seconds
    pub timeout_secs: u64,
}

impl SimplifierConfig {
    pub fn from_env() -> Self {
        let mode = match helpers::env_or("SIMPLIFIER_MODE", "webhook").to_lowercase().as_str() {
            "rules" => SimplifierMode::Rules,
            _ => SimplifierMode::Webhook,
        };
        Self {
            mode,
            webhook_url: helpers::env_or(
                "SIMPLIFIER_WEBHOOK_URL",
                "http://localhost:5678/webhook/simplify",
            ),
            timeout_secs: helpers::env_parsed("SIMPLIFIER_TIMEOUT_SECS", 10),
        }
    }
}

/// Audio synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    pub enabled: bool,
}

impl AudioConfig {
    pub fn from_env() -> Self {
        Self {
            enabled: helpers::env_bool("TTS_ENABLED", true),
        }
    }
}
